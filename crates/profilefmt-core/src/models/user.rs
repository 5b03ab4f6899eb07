//! User snapshot model and accessors.

use std::collections::BTreeSet;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ProjectId, Status, UserId};

/// Point-in-time, read-only copy of a user's profile data.
///
/// Every field defaults when absent from the serialized form, so partial
/// records coming from the presentation layer deserialize cleanly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default)]
pub struct UserSnapshot {
    /// Unique identifier of the user
    pub id: UserId,

    /// Given name, possibly blank
    pub first_name: Option<String>,

    /// Family name, possibly blank
    pub last_name: Option<String>,

    /// Free-form biography
    pub bio: Option<String>,

    /// Comma-separated skill tags
    pub skill_list: Option<String>,

    /// Email address (empty for transient users)
    pub email: String,

    /// Latitude in decimal degrees
    pub latitude: Option<f64>,

    /// Longitude in decimal degrees
    pub longitude: Option<f64>,

    /// UTC offset in seconds east of UTC
    pub timezone_offset: Option<i32>,

    /// Statuses in creation order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<Status>,

    /// Projects the user follows
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub followed_projects: BTreeSet<ProjectId>,
}

impl UserSnapshot {
    /// Returns both coordinates, or `None` unless latitude and longitude are
    /// both set.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some((latitude, longitude)),
            _ => None,
        }
    }

    /// True when exactly one of latitude/longitude is set.
    pub fn has_partial_coordinates(&self) -> bool {
        self.latitude.is_some() != self.longitude.is_some()
    }

    /// The most recently created status.
    ///
    /// Ties on `created_at` go to the status inserted last.
    pub fn latest_status(&self) -> Option<&Status> {
        self.statuses.iter().max_by_key(|status| status.created_at)
    }

    /// Whether the user follows the given project.
    pub fn follows(&self, project_id: ProjectId) -> bool {
        self.followed_projects.contains(&project_id)
    }

    /// Non-empty, trimmed entries of the skill list.
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.skill_list
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
    }
}
