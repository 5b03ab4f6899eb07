//! Display rules for a single user snapshot.

use log::{debug, warn};

use super::{BlankField, Presenter, ProfileCard, StatusView};
use crate::{
    display::{to_sentence, Contributions, SafeString},
    error::{ProfileError, Result},
    models::UserSnapshot,
};

/// Name shown when a user has neither a name nor an email.
pub const ANONYMOUS: &str = "Anonymous";

/// Timezone shown when a user has no coordinates and no stored offset.
pub const UTC: &str = "UTC";

/// Read-only projection of one [`UserSnapshot`] for display.
///
/// Nothing is cached: every call recomputes its value from the snapshot and
/// the presenter's collaborators.
pub struct UserDisplayFormatter<'a> {
    user: &'a UserSnapshot,
    presenter: &'a Presenter,
}

impl<'a> UserDisplayFormatter<'a> {
    /// Binds `user` to `presenter`.
    pub fn new(user: &'a UserSnapshot, presenter: &'a Presenter) -> Self {
        Self { user, presenter }
    }

    /// The wrapped snapshot.
    pub fn user(&self) -> &'a UserSnapshot {
        self.user
    }

    /// Human-readable name.
    ///
    /// Uses the trimmed first and last names, then the trimmed local part of
    /// the email, then [`ANONYMOUS`]. Whitespace-only values count as missing.
    pub fn display_name(&self) -> String {
        let first = non_blank(self.user.first_name.as_deref());
        let last = non_blank(self.user.last_name.as_deref());

        match (first, last) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(name), None) | (None, Some(name)) => name.to_string(),
            (None, None) if !self.user.email.trim().is_empty() => self
                .user
                .email
                .split('@')
                .next()
                .unwrap_or_default()
                .trim()
                .to_string(),
            (None, None) => ANONYMOUS.to_string(),
        }
    }

    /// Timezone to show for the user.
    ///
    /// Coordinates, when both are present, are always handed to the resolver
    /// and its answer is returned as is. Otherwise the stored offset is
    /// looked up in the offset table, and a missing offset means [`UTC`].
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::UnrecognizedOffset` when the stored offset has
    /// no entry in the offset table.
    pub fn timezone(&self) -> Result<String> {
        if let Some((latitude, longitude)) = self.user.coordinates() {
            let zone = self.presenter.resolver().lookup(latitude, longitude);
            debug!(
                "User {} at ({latitude}, {longitude}) resolved to {zone}",
                self.user.id
            );
            return Ok(zone);
        }

        if self.user.has_partial_coordinates() {
            warn!(
                "User {} has only one coordinate set, falling back to stored offset",
                self.user.id
            );
        }

        match self.user.timezone_offset {
            None => Ok(UTC.to_string()),
            Some(offset) => self
                .presenter
                .offsets()
                .label_for(offset)
                .map(|entry| entry.label.clone())
                .ok_or(ProfileError::UnrecognizedOffset { offset }),
        }
    }

    /// Standard UTC offset of [`Self::timezone`] as `+HH:MM`.
    ///
    /// Daylight saving time is not included. Offset table labels report the
    /// offset they are keyed by; other zones are read from the timezone
    /// database.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::timezone`] errors and returns
    /// `ProfileError::UnknownTimezone` when the zone is not in the database.
    pub fn timezone_formatted_offset(&self) -> Result<String> {
        let name = self.timezone()?;
        Ok(self.presenter.standard_offset(&name)?.to_string())
    }

    /// Contributions to projects the user follows, in source order.
    ///
    /// # Errors
    ///
    /// Propagates failures of the contribution source.
    pub fn contributions(&self) -> Result<Contributions> {
        let records = self.presenter.contributions().contributions_for(self.user.id)?;
        Ok(records
            .into_iter()
            .filter(|record| self.user.follows(record.project_id))
            .collect())
    }

    /// Latest status wrapped in a `<span>`, ready to render without escaping.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::NoStatusAvailable` when [`Self::has_status`]
    /// is false.
    pub fn status(&self) -> Result<SafeString> {
        self.user
            .latest_status()
            .map(|status| SafeString::wrap("span", &status.text))
            .ok_or(ProfileError::NoStatusAvailable)
    }

    /// Whether the user has posted any status.
    pub fn has_status(&self) -> bool {
        !self.user.statuses.is_empty()
    }

    /// Blank profile fields, in reporting order.
    pub fn blank_field_list(&self) -> Vec<BlankField> {
        BlankField::ALL
            .into_iter()
            .filter(|field| field.is_blank(self.user))
            .collect()
    }

    /// Blank profile fields as an English list, e.g. `"Last name and Bio"`.
    pub fn blank_fields(&self) -> String {
        let labels: Vec<&str> = self
            .blank_field_list()
            .iter()
            .map(BlankField::label)
            .collect();
        to_sentence(&labels)
    }

    /// Every display value in one record.
    ///
    /// Fields whose lookup fails are left empty, so a card can always be
    /// rendered.
    pub fn card(&self) -> ProfileCard {
        let timezone = available("timezone", self.timezone());
        let zone = timezone
            .as_deref()
            .and_then(|name| available("zone", self.presenter.time_zone(name)));
        let utc_offset = timezone
            .as_deref()
            .filter(|_| zone.is_some())
            .and_then(|name| available("utc_offset", self.presenter.standard_offset(name)))
            .map(|offset| offset.to_string());
        let status = self.user.latest_status().map(|status| StatusView {
            markup: SafeString::wrap("span", &status.text),
            text: status.text.clone(),
            posted_at: status.created_at,
        });

        ProfileCard {
            name: self.display_name(),
            timezone,
            utc_offset,
            status,
            blank_fields: self.blank_field_list(),
            contributions: available("contributions", self.contributions()),
            zone,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

fn available<T>(field: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Leaving {field} empty: {e}");
            None
        }
    }
}
