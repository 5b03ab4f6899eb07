//! Contribution sources.
//!
//! The formatter asks a [`ContributionSource`] for every record belonging to
//! a user and filters the materialized sequence itself, so sources stay
//! simple loaders.

use std::{fs, path::Path};

use crate::{
    error::{ProfileError, Result},
    models::{ContributionRecord, UserId},
};

/// Loads the unfiltered contribution records of a user.
pub trait ContributionSource: Send + Sync {
    /// All records for `user_id`, in source order.
    ///
    /// # Errors
    ///
    /// Implementations backed by I/O report their failures here.
    fn contributions_for(&self, user_id: UserId) -> Result<Vec<ContributionRecord>>;
}

/// Contribution records held in memory.
///
/// # Examples
///
/// ```rust
/// use profilefmt_core::{
///     contributions::{ContributionSource, InMemoryContributions},
///     models::ContributionRecord,
/// };
///
/// let source = InMemoryContributions::new(vec![
///     ContributionRecord { project_id: 1, user_id: 7, count: 3 },
///     ContributionRecord { project_id: 2, user_id: 8, count: 9 },
/// ]);
/// assert_eq!(source.contributions_for(7).unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryContributions {
    records: Vec<ContributionRecord>,
}

impl InMemoryContributions {
    /// Wraps already loaded records.
    pub fn new(records: Vec<ContributionRecord>) -> Self {
        Self { records }
    }

    /// Reads a JSON array of records from `path`.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::FileSystem` if the file cannot be read and
    /// `ProfileError::Serialization` if it is not a list of records.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ProfileError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let records = serde_json::from_str(&contents)?;
        Ok(Self::new(records))
    }

    /// All records regardless of user.
    pub fn records(&self) -> &[ContributionRecord] {
        &self.records
    }
}

impl ContributionSource for InMemoryContributions {
    fn contributions_for(&self, user_id: UserId) -> Result<Vec<ContributionRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|record| record.user_id == user_id)
            .copied()
            .collect())
    }
}
