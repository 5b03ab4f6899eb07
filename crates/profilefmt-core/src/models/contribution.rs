//! Contribution records linking users to projects.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ProjectId, UserId};

/// Number of contributions a user made to one project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ContributionRecord {
    /// Project contributed to
    pub project_id: ProjectId,

    /// Contributing user
    pub user_id: UserId,

    /// Commit count for this (user, project) pair
    pub count: u32,
}
