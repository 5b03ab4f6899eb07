//! DateTime display utilities.
//!
//! This module provides wrapper types for formatting instants and UTC offsets
//! in a user's timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A UTC offset formatted as `+HH:MM` / `-HH:MM`.
///
/// [`FormattedOffset::standard`] reads a zone's standard offset: daylight
/// saving time is never included, so Amsterdam is `+01:00` all year.
///
/// # Examples
///
/// ```rust
/// use profilefmt_core::display::FormattedOffset;
/// use jiff::{tz::TimeZone, Timestamp};
///
/// let tokyo = TimeZone::get("Asia/Tokyo").unwrap();
/// let at = Timestamp::from_second(1705320000).unwrap();
/// assert_eq!(FormattedOffset::standard(&tokyo, at).to_string(), "+09:00");
/// assert_eq!(FormattedOffset::from_seconds(-12600).to_string(), "-03:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattedOffset {
    seconds: i32,
}

impl FormattedOffset {
    /// Format an offset given in seconds east of UTC.
    pub fn from_seconds(seconds: i32) -> Self {
        Self { seconds }
    }

    /// The standard (non-DST) offset of `zone` around `at`.
    ///
    /// When `at` falls inside daylight saving time, the offset of the closest
    /// earlier non-DST period is used, then the closest later one.
    pub fn standard(zone: &TimeZone, at: Timestamp) -> Self {
        let info = zone.to_offset_info(at);
        let offset = if info.dst().is_dst() {
            zone.preceding(at)
                .find(|transition| !transition.dst().is_dst())
                .or_else(|| {
                    zone.following(at)
                        .find(|transition| !transition.dst().is_dst())
                })
                .map_or(info.offset(), |transition| transition.offset())
        } else {
            info.offset()
        };
        Self::from_seconds(offset.seconds())
    }

    /// Offset in seconds east of UTC.
    pub fn seconds(&self) -> i32 {
        self.seconds
    }
}

impl fmt::Display for FormattedOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.seconds < 0 { '-' } else { '+' };
        let minutes = self.seconds.unsigned_abs() / 60;
        write!(f, "{sign}{:02}:{:02}", minutes / 60, minutes % 60)
    }
}

/// A `Timestamp` shown as wall-clock time in a given timezone.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM TZ`
/// - Year, month, and day are zero-padded
/// - Time is in 24-hour format
/// - Timezone abbreviation is included (e.g., UTC, CET, JST)
pub struct LocalDateTime<'a> {
    timestamp: &'a Timestamp,
    zone: &'a TimeZone,
}

impl<'a> LocalDateTime<'a> {
    /// Show `timestamp` in `zone`.
    pub fn new(timestamp: &'a Timestamp, zone: &'a TimeZone) -> Self {
        Self { timestamp, zone }
    }
}

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.timestamp
                .to_zoned(self.zone.clone())
                .strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}
