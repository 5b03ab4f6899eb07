//! Core library for profilefmt.
//!
//! This crate turns read-only user profile snapshots into display values: a
//! human-readable name, a timezone resolved from coordinates or a stored UTC
//! offset, the latest status as pre-escaped markup, the list of incomplete
//! profile fields, and contributions to followed projects.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): snapshot records handed over by the persistence
//!   layer
//! - **Collaborators** ([`timezone`], [`contributions`]): traits for the
//!   coordinate lookup and contribution loading, with in-process
//!   implementations
//! - **Presenter** ([`presenter`]): shared context plus the per-user
//!   [`UserDisplayFormatter`]
//! - **Display helpers** ([`display`]): safe markup, list joining, offset
//!   formatting and markdown rendering
//!
//! # Quick Start
//!
//! ```rust
//! use profilefmt_core::{models::UserSnapshot, PresenterBuilder};
//!
//! let presenter = PresenterBuilder::new().build();
//!
//! let user = UserSnapshot {
//!     first_name: Some("Joe".to_string()),
//!     last_name: Some(" Blow ".to_string()),
//!     timezone_offset: Some(3600),
//!     ..Default::default()
//! };
//!
//! let formatter = presenter.format(&user);
//! assert_eq!(formatter.display_name(), "Joe Blow");
//! assert_eq!(formatter.timezone().unwrap(), "Amsterdam");
//! assert!(!formatter.has_status());
//! ```

pub mod config;
pub mod contributions;
pub mod display;
pub mod error;
pub mod models;
pub mod presenter;
pub mod timezone;

// Re-export commonly used types
pub use config::{OffsetEntry, PresenterConfig};
pub use contributions::{ContributionSource, InMemoryContributions};
pub use display::{Contributions, SafeString};
pub use error::{ProfileError, Result};
pub use models::{ContributionRecord, ProjectId, Status, UserId, UserSnapshot};
pub use presenter::{
    BlankField, Presenter, PresenterBuilder, ProfileCard, StatusView, UserDisplayFormatter,
};
pub use timezone::{OffsetLabel, OffsetTable, StaticResolver, TimezoneResolver};
