//! Coordinate to timezone lookup.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Maps geographic coordinates to a timezone identifier.
///
/// Implementations must always return an identifier, falling back to their
/// own default when no zone matches, and must be deterministic for a fixed
/// coordinate pair.
pub trait TimezoneResolver: Send + Sync {
    /// Look up the timezone identifier for a coordinate pair.
    fn lookup(&self, latitude: f64, longitude: f64) -> String;
}

impl<F> TimezoneResolver for F
where
    F: Fn(f64, f64) -> String + Send + Sync,
{
    fn lookup(&self, latitude: f64, longitude: f64) -> String {
        self(latitude, longitude)
    }
}

/// A coordinate pair pinned to a timezone identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CoordinateStub {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

/// Resolver backed by a fixed table of coordinate stubs.
///
/// Coordinates match a stub when both components are within
/// [`StaticResolver::TOLERANCE`] degrees; anything else resolves to the
/// default zone.
///
/// # Examples
///
/// ```rust
/// use profilefmt_core::timezone::{StaticResolver, TimezoneResolver};
///
/// let resolver = StaticResolver::new("Europe/London")
///     .with_stub(34.0, -118.0, "America/Los_Angeles");
///
/// assert_eq!(resolver.lookup(34.0, -118.0), "America/Los_Angeles");
/// assert_eq!(resolver.lookup(51.0, 0.0), "Europe/London");
/// ```
#[derive(Debug, Clone)]
pub struct StaticResolver {
    stubs: Vec<CoordinateStub>,
    default_zone: String,
}

impl StaticResolver {
    /// Maximum per-axis distance, in degrees, for a stub to match.
    pub const TOLERANCE: f64 = 1e-6;

    /// Creates a resolver with no stubs and the given default zone.
    pub fn new(default_zone: impl Into<String>) -> Self {
        Self {
            stubs: Vec::new(),
            default_zone: default_zone.into(),
        }
    }

    /// Pins a coordinate pair to a zone. Later stubs do not override earlier
    /// ones for the same coordinates.
    pub fn with_stub(mut self, latitude: f64, longitude: f64, zone: impl Into<String>) -> Self {
        self.stubs.push(CoordinateStub {
            latitude,
            longitude,
            timezone: zone.into(),
        });
        self
    }

    /// Adds every stub from an iterator.
    pub fn with_stubs<I>(mut self, stubs: I) -> Self
    where
        I: IntoIterator<Item = CoordinateStub>,
    {
        self.stubs.extend(stubs);
        self
    }

    /// The zone returned when no stub matches.
    pub fn default_zone(&self) -> &str {
        &self.default_zone
    }
}

impl Default for StaticResolver {
    fn default() -> Self {
        Self::new("UTC")
    }
}

impl TimezoneResolver for StaticResolver {
    fn lookup(&self, latitude: f64, longitude: f64) -> String {
        self.stubs
            .iter()
            .find(|stub| {
                (stub.latitude - latitude).abs() <= Self::TOLERANCE
                    && (stub.longitude - longitude).abs() <= Self::TOLERANCE
            })
            .map_or_else(|| self.default_zone.clone(), |stub| stub.timezone.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_and_default() {
        let resolver = StaticResolver::new("Europe/London")
            .with_stub(34.0, -118.0, "America/Los_Angeles")
            .with_stub(25.95, 32.58, "Africa/Cairo");

        assert_eq!(resolver.lookup(34.0, -118.0), "America/Los_Angeles");
        assert_eq!(resolver.lookup(25.95, 32.58), "Africa/Cairo");
        assert_eq!(resolver.lookup(51.0, 0.0), "Europe/London");
        assert_eq!(resolver.default_zone(), "Europe/London");
    }

    #[test]
    fn test_first_matching_stub_wins() {
        let resolver = StaticResolver::default()
            .with_stub(10.0, 10.0, "Africa/Lagos")
            .with_stub(10.0, 10.0, "Africa/Abuja");
        assert_eq!(resolver.lookup(10.0, 10.0), "Africa/Lagos");
        assert_eq!(resolver.lookup(10.1, 10.0), "UTC");
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |latitude: f64, _longitude: f64| {
            if latitude > 0.0 {
                "Europe/Oslo".to_string()
            } else {
                "Antarctica/Troll".to_string()
            }
        };
        assert_eq!(resolver.lookup(60.0, 10.0), "Europe/Oslo");
        assert_eq!(resolver.lookup(-72.0, 2.5), "Antarctica/Troll");
    }
}
