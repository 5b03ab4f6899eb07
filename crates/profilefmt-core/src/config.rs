//! Presenter configuration.
//!
//! Configuration is a JSON document; every key is optional:
//!
//! ```json
//! {
//!   "default_timezone": "Europe/London",
//!   "coordinates": [
//!     { "latitude": 34.0, "longitude": -118.0, "timezone": "America/Los_Angeles" }
//!   ],
//!   "offsets": [
//!     { "offset": 0, "label": "Casablanca", "zone": "Africa/Casablanca" }
//!   ],
//!   "reference_time": "2024-01-15T12:00:00Z"
//! }
//! ```
//!
//! Without an explicit path the file is looked up at
//! `$XDG_CONFIG_HOME/profilefmt/config.json`; when it does not exist the
//! defaults apply.

use std::{
    fs,
    path::{Path, PathBuf},
};

use jiff::{tz::TimeZone, Timestamp};
use log::debug;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ProfileError, Result},
    timezone::{CoordinateStub, OffsetLabel, OffsetTable, StaticResolver},
};

/// One row of a custom offset table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct OffsetEntry {
    /// Seconds east of UTC
    pub offset: i32,
    /// Display label
    pub label: String,
    /// IANA zone backing the label
    pub zone: String,
}

/// Collaborator settings for a [`crate::Presenter`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default)]
pub struct PresenterConfig {
    /// Zone returned by the resolver when no coordinate stub matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_timezone: Option<String>,

    /// Coordinate pairs pinned to zones
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub coordinates: Vec<CoordinateStub>,

    /// Replacement for the standard offset table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offsets: Option<Vec<OffsetEntry>>,

    /// Instant at which UTC offsets are read (defaults to now)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub reference_time: Option<Timestamp>,
}

impl PresenterConfig {
    /// Zone used when the resolver has no better answer.
    pub const FALLBACK_TIMEZONE: &'static str = "UTC";

    /// Loads configuration from `path`, or from the XDG default location.
    ///
    /// An explicit path must exist. A missing default file yields
    /// [`PresenterConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::FileSystem` if an explicit file cannot be read,
    /// `ProfileError::Serialization` if it is not valid JSON, and any error
    /// from [`PresenterConfig::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => {
                    debug!("No configuration file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };
        Self::from_json_file(&path)
    }

    /// Reads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// See [`PresenterConfig::load`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let contents = fs::read_to_string(path).map_err(|e| ProfileError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Existing configuration file under the XDG config directory.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("profilefmt").find_config_file("config.json")
    }

    /// Checks coordinates, labels and zone names.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::InvalidInput` for empty names or out-of-range
    /// coordinates and `ProfileError::UnknownTimezone` for zones missing from
    /// the timezone database.
    pub fn validate(&self) -> Result<()> {
        if let Some(zone) = &self.default_timezone {
            if zone.trim().is_empty() {
                return Err(ProfileError::invalid_input("default_timezone")
                    .with_reason("must not be empty"));
            }
        }

        for stub in &self.coordinates {
            if !stub.latitude.is_finite() || !(-90.0..=90.0).contains(&stub.latitude) {
                return Err(ProfileError::invalid_input("coordinates.latitude")
                    .with_reason(format!("{} is outside -90..=90", stub.latitude)));
            }
            if !stub.longitude.is_finite() || !(-180.0..=180.0).contains(&stub.longitude) {
                return Err(ProfileError::invalid_input("coordinates.longitude")
                    .with_reason(format!("{} is outside -180..=180", stub.longitude)));
            }
            if stub.timezone.trim().is_empty() {
                return Err(ProfileError::invalid_input("coordinates.timezone")
                    .with_reason("must not be empty"));
            }
        }

        for entry in self.offsets.iter().flatten() {
            if entry.label.trim().is_empty() {
                return Err(ProfileError::invalid_input("offsets.label")
                    .with_reason(format!("empty label for offset {}", entry.offset)));
            }
            TimeZone::get(&entry.zone)
                .map_err(|e| ProfileError::unknown_timezone(&entry.zone, e))?;
        }

        Ok(())
    }

    /// Resolver built from the coordinate stubs and default zone.
    pub fn resolver(&self) -> StaticResolver {
        StaticResolver::new(
            self.default_timezone
                .as_deref()
                .unwrap_or(Self::FALLBACK_TIMEZONE),
        )
        .with_stubs(self.coordinates.iter().cloned())
    }

    /// Custom offset table, or the standard one when none is configured.
    pub fn offset_table(&self) -> OffsetTable {
        match &self.offsets {
            Some(entries) => entries
                .iter()
                .map(|entry| {
                    (
                        entry.offset,
                        OffsetLabel {
                            label: entry.label.clone(),
                            zone: entry.zone.clone(),
                        },
                    )
                })
                .collect(),
            None => OffsetTable::standard(),
        }
    }
}
