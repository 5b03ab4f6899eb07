//! Markdown rendering of profile cards.

use std::fmt;

use jiff::tz::TimeZone;

use super::datetime::LocalDateTime;
use crate::presenter::ProfileCard;

impl fmt::Display for ProfileCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;

        match (&self.timezone, &self.utc_offset) {
            (Some(timezone), Some(offset)) => writeln!(f, "- Timezone: {timezone} (UTC{offset})")?,
            (Some(timezone), None) => writeln!(f, "- Timezone: {timezone}")?,
            _ => writeln!(f, "- Timezone: unknown")?,
        }

        if let Some(status) = &self.status {
            let zone = self.zone.clone().unwrap_or(TimeZone::UTC);
            writeln!(
                f,
                "- Status: {} (posted {})",
                status.text,
                LocalDateTime::new(&status.posted_at, &zone)
            )?;
        }

        if self.is_complete() {
            writeln!(f, "- Profile: complete")?;
        } else {
            writeln!(f, "- Missing: {}", self.blank_fields_sentence())?;
        }

        if let Some(contributions) = &self.contributions {
            writeln!(f, "\n## Contributions")?;
            writeln!(f)?;
            write!(f, "{}", contributions)?;
        }

        Ok(())
    }
}
