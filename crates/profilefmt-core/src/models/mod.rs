//! Data models for user profile snapshots.
//!
//! This module contains the read-only records handed to the formatter by the
//! persistence layer: the [`UserSnapshot`] itself, its [`Status`] history and
//! the [`ContributionRecord`]s produced by a contribution source. None of the
//! formatting code mutates these values; every display output is derived.
//!
//! # Examples
//!
//! ```rust
//! use profilefmt_core::models::{Status, UserSnapshot};
//! use jiff::Timestamp;
//!
//! let user = UserSnapshot {
//!     id: 7,
//!     first_name: Some("Joe".to_string()),
//!     email: "joe@blow.com".to_string(),
//!     statuses: vec![Status::new(Status::OPTIONS[0], Timestamp::UNIX_EPOCH)],
//!     ..Default::default()
//! };
//! assert!(user.latest_status().is_some());
//! assert_eq!(user.coordinates(), None);
//! ```

pub mod contribution;
pub mod status;
pub mod user;


/// Identifier of a persisted user.
pub type UserId = u64;

/// Identifier of a project.
pub type ProjectId = u64;

pub use contribution::ContributionRecord;
pub use status::Status;
pub use user::UserSnapshot;
