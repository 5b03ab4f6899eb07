//! Timezone resolution collaborators.
//!
//! The formatter never decides on its own which zone a coordinate pair
//! belongs to. It delegates to a [`TimezoneResolver`], and falls back to an
//! injected [`OffsetTable`] when a snapshot only carries a UTC offset.
//!
//! ```text
//! ┌─────────────────┐  lat/lon   ┌──────────────────┐
//! │  UserSnapshot   │──────────▶│ TimezoneResolver │──▶ "America/Los_Angeles"
//! │                 │  offset    ┌──────────────────┐
//! │                 │──────────▶│   OffsetTable    │──▶ "Amsterdam"
//! └─────────────────┘            └──────────────────┘
//! ```

pub mod offsets;
pub mod resolver;

pub use offsets::{OffsetLabel, OffsetTable};
pub use resolver::{CoordinateStub, StaticResolver, TimezoneResolver};
