//! Booking Models

use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter, Result as FmtResult},
};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Number of characters of the logo payload kept on a booking.
pub const LOGO_PREVIEW_CHARS: usize = 120;

/// Booking Id, e.g. `PX01`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    /// Format the `n`th booking id.
    #[must_use]
    pub fn from_sequence(n: u64) -> Self {
        Self(format!("PX{n:02}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for BookingId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<String> for BookingId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for BookingId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Booking Model
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    pub created_at: Timestamp,
    pub first_name: String,
    pub surname: String,
    pub club_school: String,
    pub contact_number: String,
    pub contact_email: String,
    pub payment_option: String,
    pub costing: String,
    pub colour: String,
    pub additional_notes: String,
    pub logo_image_truncated: String,
}

impl Booking {
    /// Fields persisted on every booking, in response order.
    pub const STORED_FIELDS: [&'static str; 12] = [
        "id",
        "timestamp",
        "first_name",
        "surname",
        "club_school",
        "contact_number",
        "contact_email",
        "payment_option",
        "costing",
        "colour",
        "additional_notes",
        "logo_image_truncated",
    ];

    /// Build a booking from a submission that already passed validation.
    #[must_use]
    pub fn from_submission(id: BookingId, created_at: Timestamp, submission: BookingSubmission) -> Self {
        let colour = preferred_colour(
            submission.colour.as_deref(),
            submission.colour_selection.as_deref(),
        );

        Self {
            id,
            created_at,
            first_name: trimmed(submission.first_name),
            surname: trimmed(submission.surname),
            club_school: trimmed(submission.club_school),
            contact_number: trimmed(submission.contact_number),
            contact_email: trimmed(submission.contact_email),
            payment_option: trimmed(submission.payment_option),
            costing: trimmed(submission.costing),
            colour,
            additional_notes: trimmed(submission.additional_notes),
            logo_image_truncated: logo_preview(submission.logo_image.as_deref().unwrap_or_default()),
        }
    }

    /// Overwrite the fields present in `update`, returning what changed.
    pub fn apply(&mut self, update: &BookingUpdate) -> BookingChanges {
        let mut changes = BookingChanges::new();

        let text_fields = [
            ("first_name", &update.first_name, &mut self.first_name),
            ("surname", &update.surname, &mut self.surname),
            ("club_school", &update.club_school, &mut self.club_school),
            ("contact_number", &update.contact_number, &mut self.contact_number),
            ("contact_email", &update.contact_email, &mut self.contact_email),
            ("payment_option", &update.payment_option, &mut self.payment_option),
            ("costing", &update.costing, &mut self.costing),
            ("additional_notes", &update.additional_notes, &mut self.additional_notes),
        ];

        for (name, provided, field) in text_fields {
            if let Some(value) = provided {
                *field = trimmed(value.clone());
                changes.insert(name.to_string(), field.clone());
            }
        }

        if update.colour.is_some() || update.colour_selection.is_some() {
            self.colour = preferred_colour(
                update.colour.as_ref().and_then(Option::as_deref),
                update.colour_selection.as_ref().and_then(Option::as_deref),
            );
            changes.insert("colour".to_string(), self.colour.clone());
        }

        if let Some(logo) = &update.logo_image {
            self.logo_image_truncated = logo_preview(logo.as_deref().unwrap_or_default());
            changes.insert(
                "logo_image_truncated".to_string(),
                self.logo_image_truncated.clone(),
            );
        }

        changes
    }

    /// View the stored fields as a submission so they can be re-validated.
    #[must_use]
    pub fn as_submission(&self, logo_image: Option<String>) -> BookingSubmission {
        BookingSubmission {
            first_name: Some(self.first_name.clone()),
            surname: Some(self.surname.clone()),
            club_school: Some(self.club_school.clone()),
            contact_number: Some(self.contact_number.clone()),
            contact_email: Some(self.contact_email.clone()),
            payment_option: Some(self.payment_option.clone()),
            costing: Some(self.costing.clone()),
            colour: Some(self.colour.clone()),
            colour_selection: None,
            logo_image,
            additional_notes: Some(self.additional_notes.clone()),
        }
    }
}

/// Raw booking form payload. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingSubmission {
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub club_school: Option<String>,
    pub contact_number: Option<String>,
    pub contact_email: Option<String>,
    pub payment_option: Option<String>,
    pub costing: Option<String>,
    pub colour: Option<String>,
    pub colour_selection: Option<String>,
    pub logo_image: Option<String>,
    pub additional_notes: Option<String>,
}

/// Partial booking update.
///
/// The outer `Option` records whether a key was sent at all; the inner one
/// is `None` when the key was sent as `null`, which clears the field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingUpdate {
    pub first_name: Option<Option<String>>,
    pub surname: Option<Option<String>>,
    pub club_school: Option<Option<String>>,
    pub contact_number: Option<Option<String>>,
    pub contact_email: Option<Option<String>>,
    pub payment_option: Option<Option<String>>,
    pub costing: Option<Option<String>>,
    pub colour: Option<Option<String>>,
    pub colour_selection: Option<Option<String>>,
    pub logo_image: Option<Option<String>>,
    pub additional_notes: Option<Option<String>>,
}

/// Field name to new value for every field an update touched.
pub type BookingChanges = BTreeMap<String, String>;

fn trimmed(value: Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}

/// `colour` wins unless it is missing or empty, then `colour_selection`.
fn preferred_colour(colour: Option<&str>, colour_selection: Option<&str>) -> String {
    colour
        .filter(|value| !value.is_empty())
        .or(colour_selection.filter(|value| !value.is_empty()))
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

/// First [`LOGO_PREVIEW_CHARS`] characters of a logo, with an ellipsis when cut.
#[must_use]
pub fn logo_preview(logo: &str) -> String {
    let mut preview: String = logo.chars().take(LOGO_PREVIEW_CHARS).collect();

    if logo.chars().nth(LOGO_PREVIEW_CHARS).is_some() {
        preview.push('…');
    }

    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_ids_are_zero_padded() {
        assert_eq!(BookingId::from_sequence(1).as_str(), "PX01");
        assert_eq!(BookingId::from_sequence(42).as_str(), "PX42");
        assert_eq!(BookingId::from_sequence(100).as_str(), "PX100");
    }

    #[test]
    fn colour_falls_back_to_colour_selection() {
        assert_eq!(preferred_colour(Some(" Red "), Some("Blue")), "Red");
        assert_eq!(preferred_colour(Some(""), Some("Blue")), "Blue");
        assert_eq!(preferred_colour(None, Some("Blue")), "Blue");
        assert_eq!(preferred_colour(None, None), "");
    }

    #[test]
    fn logo_preview_truncates_long_payloads() {
        let long = "A".repeat(LOGO_PREVIEW_CHARS + 5);
        let preview = logo_preview(&long);

        assert_eq!(preview.chars().count(), LOGO_PREVIEW_CHARS + 1);
        assert!(preview.ends_with('…'));
    }

    #[test]
    fn logo_preview_keeps_short_payloads() {
        assert_eq!(logo_preview("data:image/png;base64,AAAA"), "data:image/png;base64,AAAA");
        assert_eq!(logo_preview(""), "");
    }

    #[test]
    fn from_submission_trims_fields() {
        let booking = Booking::from_submission(
            BookingId::from_sequence(1),
            Timestamp::UNIX_EPOCH,
            BookingSubmission {
                first_name: Some("  Thandi ".to_string()),
                colour_selection: Some(" Galaxy (+ R180) ".to_string()),
                ..BookingSubmission::default()
            },
        );

        assert_eq!(booking.first_name, "Thandi");
        assert_eq!(booking.colour, "Galaxy (+ R180)");
        assert_eq!(booking.surname, "");
    }

    #[test]
    fn apply_only_touches_provided_fields() {
        let mut booking = Booking::from_submission(
            BookingId::from_sequence(1),
            Timestamp::UNIX_EPOCH,
            BookingSubmission {
                first_name: Some("Thandi".to_string()),
                additional_notes: Some("Left-handed".to_string()),
                colour: Some("Red".to_string()),
                ..BookingSubmission::default()
            },
        );

        let changes = booking.apply(&BookingUpdate {
            first_name: Some(Some(" Lerato ".to_string())),
            additional_notes: Some(None),
            ..BookingUpdate::default()
        });

        assert_eq!(booking.first_name, "Lerato");
        assert_eq!(booking.additional_notes, "");
        assert_eq!(booking.colour, "Red");
        assert_eq!(changes.len(), 2, "only two fields were provided");
        assert_eq!(changes.get("first_name").map(String::as_str), Some("Lerato"));
    }

    #[test]
    fn apply_colour_selection_updates_colour() {
        let mut booking = Booking::from_submission(
            BookingId::from_sequence(1),
            Timestamp::UNIX_EPOCH,
            BookingSubmission {
                colour: Some("Red".to_string()),
                ..BookingSubmission::default()
            },
        );

        let changes = booking.apply(&BookingUpdate {
            colour_selection: Some(Some("Clear".to_string())),
            ..BookingUpdate::default()
        });

        assert_eq!(booking.colour, "Clear");
        assert_eq!(changes.get("colour").map(String::as_str), Some("Clear"));
    }
}
