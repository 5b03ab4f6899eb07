//! Builder for creating and configuring Presenter instances.

use jiff::Timestamp;

use super::Presenter;
use crate::{
    config::PresenterConfig,
    contributions::{ContributionSource, InMemoryContributions},
    timezone::{OffsetTable, StaticResolver, TimezoneResolver},
};

/// Builder for creating and configuring Presenter instances.
///
/// Unset collaborators fall back to a resolver that answers `"UTC"`, the
/// standard offset table, an empty contribution source, and the current time
/// as reference instant.
pub struct PresenterBuilder {
    resolver: Option<Box<dyn TimezoneResolver>>,
    offsets: Option<OffsetTable>,
    contributions: Option<Box<dyn ContributionSource>>,
    reference_time: Option<Timestamp>,
}

impl PresenterBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            resolver: None,
            offsets: None,
            contributions: None,
            reference_time: None,
        }
    }

    /// Creates a builder preloaded from a configuration.
    pub fn from_config(config: &PresenterConfig) -> Self {
        Self::new()
            .with_resolver(config.resolver())
            .with_offset_table(config.offset_table())
            .with_reference_time(config.reference_time)
    }

    /// Sets the coordinate resolver.
    pub fn with_resolver<R>(mut self, resolver: R) -> Self
    where
        R: TimezoneResolver + 'static,
    {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Sets the offset to label table.
    pub fn with_offset_table(mut self, offsets: OffsetTable) -> Self {
        self.offsets = Some(offsets);
        self
    }

    /// Sets the contribution source.
    pub fn with_contribution_source<S>(mut self, source: S) -> Self
    where
        S: ContributionSource + 'static,
    {
        self.contributions = Some(Box::new(source));
        self
    }

    /// Pins the instant at which UTC offsets are read.
    ///
    /// If not specified, each offset lookup uses the current time.
    pub fn with_reference_time(mut self, reference_time: Option<Timestamp>) -> Self {
        if let Some(reference_time) = reference_time {
            self.reference_time = Some(reference_time);
        }
        self
    }

    /// Builds the configured presenter.
    pub fn build(self) -> Presenter {
        Presenter {
            resolver: self
                .resolver
                .unwrap_or_else(|| Box::new(StaticResolver::default())),
            offsets: self.offsets.unwrap_or_else(OffsetTable::standard),
            contributions: self
                .contributions
                .unwrap_or_else(|| Box::new(InMemoryContributions::default())),
            reference_time: self.reference_time,
        }
    }
}

impl Default for PresenterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
