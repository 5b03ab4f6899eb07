//! Aggregated profile view.

use jiff::{tz::TimeZone, Timestamp};
use serde::Serialize;

use super::BlankField;
use crate::display::{to_sentence, Contributions, SafeString};

/// The user's latest status, both as markup and as plain text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusView {
    /// `<span>`-wrapped, escaped status text
    pub markup: SafeString,
    /// Raw status text
    pub text: String,
    /// When the status was posted
    pub posted_at: Timestamp,
}

/// Every display value of one user, as produced by
/// [`super::UserDisplayFormatter::card`].
///
/// Serializes to the JSON shape handed to API consumers; its markdown form is
/// provided by the `Display` implementation in [`crate::display`].
#[derive(Debug, Clone, Serialize)]
pub struct ProfileCard {
    /// Display name
    pub name: String,

    /// Timezone name, when it could be resolved
    pub timezone: Option<String>,

    /// UTC offset of the timezone as `+HH:MM`
    pub utc_offset: Option<String>,

    /// Latest status, if any
    pub status: Option<StatusView>,

    /// Fields the user still has to fill in
    pub blank_fields: Vec<BlankField>,

    /// Contributions to followed projects
    pub contributions: Option<Contributions>,

    /// Loaded zone, used to show timestamps in the user's local time
    #[serde(skip)]
    pub(crate) zone: Option<TimeZone>,
}

impl ProfileCard {
    /// Blank fields as an English list.
    pub fn blank_fields_sentence(&self) -> String {
        let labels: Vec<&str> = self.blank_fields.iter().map(BlankField::label).collect();
        to_sentence(&labels)
    }

    /// Whether every checked field is filled in.
    pub fn is_complete(&self) -> bool {
        self.blank_fields.is_empty()
    }
}
