//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use serde::Serialize;

use crate::models::ContributionRecord;

/// Newtype wrapper for displaying a user's contributions.
///
/// Keeps the order the records were produced in. Handles empty collections
/// gracefully.
///
/// # Examples
///
/// ```rust
/// use profilefmt_core::{display::Contributions, models::ContributionRecord};
///
/// let records = vec![ContributionRecord {
///     project_id: 3,
///     user_id: 1,
///     count: 12,
/// }];
/// let contributions = Contributions(records);
/// assert_eq!(contributions.total_count(), 12);
/// assert!(format!("{}", contributions).contains("Project 3"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Contributions(pub Vec<ContributionRecord>);

impl Contributions {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of records in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the record at the given index.
    pub fn get(&self, index: usize) -> Option<&ContributionRecord> {
        self.0.get(index)
    }

    /// Get an iterator over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, ContributionRecord> {
        self.0.iter()
    }

    /// Sum of commit counts across all records.
    pub fn total_count(&self) -> u64 {
        self.0.iter().map(|record| u64::from(record.count)).sum()
    }
}

impl Index<usize> for Contributions {
    type Output = ContributionRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Contributions {
    type Item = ContributionRecord;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Contributions {
    type Item = &'a ContributionRecord;
    type IntoIter = std::slice::Iter<'a, ContributionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<ContributionRecord> for Contributions {
    fn from_iter<I: IntoIterator<Item = ContributionRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Contributions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No contributions found.")
        } else {
            for record in &self.0 {
                let noun = if record.count == 1 { "commit" } else { "commits" };
                writeln!(f, "- Project {}: {} {noun}", record.project_id, record.count)?;
            }
            Ok(())
        }
    }
}
