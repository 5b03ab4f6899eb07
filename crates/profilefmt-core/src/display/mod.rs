//! Display formatting helpers and wrapper types.
//!
//! This module holds the building blocks the formatter uses to turn snapshot
//! data into display values, plus the markdown rendering of a
//! [`crate::presenter::ProfileCard`].
//!
//! ## Module Organization
//!
//! - [`safe`]: Pre-escaped markup ([`SafeString`])
//! - [`sentence`]: English list joining ([`to_sentence`])
//! - [`datetime`]: UTC offset and local time formatting
//! - [`collections`]: Collection wrapper types ([`Contributions`])
//! - `card`: `Display` for profile cards
//!
//! ## Usage Examples
//!
//! ```rust
//! use profilefmt_core::display::{to_sentence, SafeString};
//!
//! assert_eq!(to_sentence(&["Skills", "Bio"]), "Skills and Bio");
//! assert_eq!(SafeString::wrap("span", "Taking a break"), "<span>Taking a break</span>");
//! ```

mod card;
pub mod collections;
pub mod datetime;
pub mod safe;
pub mod sentence;

// Re-export commonly used types for convenience
pub use collections::Contributions;
pub use datetime::{FormattedOffset, LocalDateTime};
pub use safe::SafeString;
pub use sentence::to_sentence;
