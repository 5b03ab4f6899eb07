//! User status entries.

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A short availability message posted by a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Status {
    /// Status message
    pub text: String,

    /// Timestamp when the status was posted (UTC)
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub created_at: Timestamp,
}

impl Status {
    /// Status messages offered by the profile editor.
    pub const OPTIONS: [&'static str; 6] = [
        "Just got here",
        "Looking for a project",
        "Available for pair programming",
        "Busy working on a project",
        "Taking a break",
        "Away for a while",
    ];

    /// Create a status posted at the given instant.
    pub fn new(text: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            text: text.into(),
            created_at,
        }
    }
}
