//! Profile fields checked for completeness.

use std::fmt;

use serde::Serialize;

use crate::models::UserSnapshot;

/// A profile field that can be left blank.
///
/// Variants are declared in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankField {
    FirstName,
    LastName,
    Skills,
    Bio,
}

impl BlankField {
    /// Every checked field, in reporting order.
    pub const ALL: [BlankField; 4] = [
        BlankField::FirstName,
        BlankField::LastName,
        BlankField::Skills,
        BlankField::Bio,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            BlankField::FirstName => "First name",
            BlankField::LastName => "Last name",
            BlankField::Skills => "Skills",
            BlankField::Bio => "Bio",
        }
    }

    /// Whether this field is blank on `user`.
    pub fn is_blank(&self, user: &UserSnapshot) -> bool {
        match self {
            BlankField::FirstName => is_blank_text(user.first_name.as_deref()),
            BlankField::LastName => is_blank_text(user.last_name.as_deref()),
            BlankField::Skills => user.skills().next().is_none(),
            BlankField::Bio => is_blank_text(user.bio.as_deref()),
        }
    }
}

impl fmt::Display for BlankField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn is_blank_text(value: Option<&str>) -> bool {
    value.map_or(true, |text| text.trim().is_empty())
}
