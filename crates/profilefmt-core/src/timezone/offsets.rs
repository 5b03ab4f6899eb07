//! UTC offset to display label mapping.

use std::collections::BTreeMap;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Display label for a UTC offset, plus the zone used to read its offset
/// back from the timezone database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct OffsetLabel {
    /// Human-facing zone name, e.g. "Amsterdam"
    pub label: String,

    /// IANA identifier backing the label, e.g. "Europe/Amsterdam"
    pub zone: String,
}

/// Finite mapping from offsets in seconds to display labels.
///
/// The table is configuration: [`OffsetTable::standard`] ships the labels the
/// profile pages use, and a custom table can be built with
/// [`OffsetTable::insert`] or loaded from the presenter config.
///
/// # Examples
///
/// ```rust
/// use profilefmt_core::timezone::OffsetTable;
///
/// let table = OffsetTable::standard();
/// assert_eq!(table.label_for(0).map(|l| l.label.as_str()), Some("Casablanca"));
/// assert_eq!(table.label_for(3600).map(|l| l.label.as_str()), Some("Amsterdam"));
/// assert_eq!(table.zone_for_label("Amsterdam"), Some("Europe/Amsterdam"));
/// assert_eq!(table.offset_for_label("Casablanca"), Some(0));
/// assert!(table.label_for(1234).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetTable {
    entries: BTreeMap<i32, OffsetLabel>,
}

/// First zone name, alphabetically, for each standard offset.
const STANDARD_LABELS: [(i32, &str, &str); 34] = [
    (-43200, "International Date Line West", "Etc/GMT+12"),
    (-39600, "American Samoa", "Pacific/Pago_Pago"),
    (-36000, "Hawaii", "Pacific/Honolulu"),
    (-32400, "Alaska", "America/Juneau"),
    (-28800, "Pacific Time (US & Canada)", "America/Los_Angeles"),
    (-25200, "Arizona", "America/Phoenix"),
    (-21600, "Central America", "America/Guatemala"),
    (-18000, "Bogota", "America/Bogota"),
    (-14400, "Atlantic Time (Canada)", "America/Halifax"),
    (-12600, "Newfoundland", "America/St_Johns"),
    (-10800, "Brasilia", "America/Sao_Paulo"),
    (-7200, "Mid-Atlantic", "Atlantic/South_Georgia"),
    (-3600, "Azores", "Atlantic/Azores"),
    (0, "Casablanca", "Africa/Casablanca"),
    (3600, "Amsterdam", "Europe/Amsterdam"),
    (7200, "Athens", "Europe/Athens"),
    (10800, "Baghdad", "Asia/Baghdad"),
    (12600, "Tehran", "Asia/Tehran"),
    (14400, "Abu Dhabi", "Asia/Muscat"),
    (16200, "Kabul", "Asia/Kabul"),
    (18000, "Ekaterinburg", "Asia/Yekaterinburg"),
    (19800, "Chennai", "Asia/Kolkata"),
    (20700, "Kathmandu", "Asia/Kathmandu"),
    (21600, "Almaty", "Asia/Almaty"),
    (23400, "Rangoon", "Asia/Yangon"),
    (25200, "Bangkok", "Asia/Bangkok"),
    (28800, "Beijing", "Asia/Shanghai"),
    (32400, "Osaka", "Asia/Tokyo"),
    (34200, "Adelaide", "Australia/Adelaide"),
    (36000, "Brisbane", "Australia/Brisbane"),
    (39600, "Magadan", "Asia/Magadan"),
    (43200, "Auckland", "Pacific/Auckland"),
    (45900, "Chatham Is.", "Pacific/Chatham"),
    (46800, "Nuku'alofa", "Pacific/Tongatapu"),
];

impl OffsetTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard label table, one entry per supported offset.
    pub fn standard() -> Self {
        STANDARD_LABELS
            .iter()
            .map(|&(offset, label, zone)| {
                (
                    offset,
                    OffsetLabel {
                        label: label.to_string(),
                        zone: zone.to_string(),
                    },
                )
            })
            .collect()
    }

    /// Adds or replaces the label for `offset`.
    pub fn insert(&mut self, offset: i32, label: impl Into<String>, zone: impl Into<String>) {
        self.entries.insert(
            offset,
            OffsetLabel {
                label: label.into(),
                zone: zone.into(),
            },
        );
    }

    /// Label configured for `offset`, if any.
    pub fn label_for(&self, offset: i32) -> Option<&OffsetLabel> {
        self.entries.get(&offset)
    }

    /// IANA zone behind a display label.
    pub fn zone_for_label(&self, label: &str) -> Option<&str> {
        self.entries
            .values()
            .find(|entry| entry.label == label)
            .map(|entry| entry.zone.as_str())
    }

    /// Offset, in seconds, whose entry carries `label`.
    pub fn offset_for_label(&self, label: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|(_, entry)| entry.label == label)
            .map(|(&offset, _)| offset)
    }

    /// Iterate over entries in ascending offset order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &OffsetLabel)> {
        self.entries.iter().map(|(&offset, label)| (offset, label))
    }

    /// Number of configured offsets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no offsets are configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(i32, OffsetLabel)> for OffsetTable {
    fn from_iter<I: IntoIterator<Item = (i32, OffsetLabel)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
