//! Presenter and per-user display formatter.
//!
//! A [`Presenter`] owns the collaborators every formatting call needs: the
//! coordinate [`TimezoneResolver`], the injected [`OffsetTable`], the
//! [`ContributionSource`] and the reference instant for offset lookups. It is
//! built once and shared; [`Presenter::format`] wraps a single
//! [`UserSnapshot`] in a [`UserDisplayFormatter`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  UserSnapshot   │    │ UserDisplay     │    │  Display values │
//! │  (read-only)    │───▶│ Formatter       │───▶│  name, timezone │
//! │                 │    │  + Presenter    │    │  status, card   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use profilefmt_core::{models::UserSnapshot, timezone::StaticResolver, PresenterBuilder};
//!
//! let presenter = PresenterBuilder::new()
//!     .with_resolver(StaticResolver::new("Europe/London").with_stub(
//!         34.0,
//!         -118.0,
//!         "America/Los_Angeles",
//!     ))
//!     .build();
//!
//! let user = UserSnapshot {
//!     email: "joe@blow.com".to_string(),
//!     latitude: Some(34.0),
//!     longitude: Some(-118.0),
//!     ..Default::default()
//! };
//! let formatter = presenter.format(&user);
//! assert_eq!(formatter.display_name(), "joe");
//! assert_eq!(formatter.timezone().unwrap(), "America/Los_Angeles");
//! assert_eq!(formatter.blank_fields(), "First name, Last name, Skills, and Bio");
//! ```

pub mod builder;
pub mod card;
pub mod fields;
pub mod formatter;


use jiff::{tz::TimeZone, Timestamp};
use log::debug;

pub use builder::PresenterBuilder;
pub use card::{ProfileCard, StatusView};
pub use fields::BlankField;
pub use formatter::UserDisplayFormatter;

use crate::{
    contributions::ContributionSource,
    display::FormattedOffset,
    error::{ProfileError, Result},
    models::UserSnapshot,
    timezone::{OffsetTable, TimezoneResolver},
};

/// Shared, read-only formatting context.
pub struct Presenter {
    resolver: Box<dyn TimezoneResolver>,
    offsets: OffsetTable,
    contributions: Box<dyn ContributionSource>,
    reference_time: Option<Timestamp>,
}

impl Presenter {
    /// Wraps `user` in a formatter bound to this presenter.
    pub fn format<'a>(&'a self, user: &'a UserSnapshot) -> UserDisplayFormatter<'a> {
        UserDisplayFormatter::new(user, self)
    }

    /// The configured coordinate resolver.
    pub fn resolver(&self) -> &dyn TimezoneResolver {
        self.resolver.as_ref()
    }

    /// The configured offset table.
    pub fn offsets(&self) -> &OffsetTable {
        &self.offsets
    }

    /// The configured contribution source.
    pub fn contributions(&self) -> &dyn ContributionSource {
        self.contributions.as_ref()
    }

    /// Instant at which a zone's standard offset is read.
    ///
    /// Daylight saving time never changes the result; the instant only
    /// matters for zones whose standard offset itself changed. Defaults to
    /// the current time.
    pub fn reference_time(&self) -> Timestamp {
        self.reference_time.unwrap_or_else(Timestamp::now)
    }

    /// Loads the zone behind a timezone name.
    ///
    /// Offset table labels are mapped to their backing zone; anything else is
    /// treated as an IANA identifier.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::UnknownTimezone` when the timezone database has
    /// no such zone.
    pub fn time_zone(&self, name: &str) -> Result<TimeZone> {
        let zone = self.offsets.zone_for_label(name).unwrap_or(name);
        TimeZone::get(zone).map_err(|e| ProfileError::unknown_timezone(name, e))
    }

    /// Standard UTC offset behind a timezone name.
    ///
    /// An offset table label answers with the offset it is keyed by; anything
    /// else is loaded from the timezone database.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::UnknownTimezone` when the timezone database has
    /// no such zone.
    pub fn standard_offset(&self, name: &str) -> Result<FormattedOffset> {
        if let Some(seconds) = self.offsets.offset_for_label(name) {
            debug!("Using table offset {seconds} for {name}");
            return Ok(FormattedOffset::from_seconds(seconds));
        }
        let zone = self.time_zone(name)?;
        Ok(FormattedOffset::standard(&zone, self.reference_time()))
    }
}
