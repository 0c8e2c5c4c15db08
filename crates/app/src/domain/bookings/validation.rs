//! Booking payload validation.

use std::sync::LazyLock;

use base64::{
    Engine as _,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use regex::Regex;

use crate::domain::bookings::models::BookingSubmission;

/// Number of leading logo characters checked for base64 validity.
pub const LOGO_SAMPLE_CHARS: usize = 200;

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:0|\+27)[1-9][0-9]{8}\n?$").expect("phone pattern is valid")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\t\n\x0B\x0C\r ]+@[^@\t\n\x0B\x0C\r ]+\.[^@\t\n\x0B\x0C\r ]+\n?$")
        .expect("email pattern is valid")
});

/// Most `=` characters a sample may end with.
const MAX_LOGO_PADDING: usize = 2;

// Padding is checked by `is_padded_base64`; trailing bits are not checked
// since only the leading sample of the payload is decoded.
const LOGO_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Validate a booking payload, collecting every problem found.
///
/// # Errors
///
/// Returns the human-readable list of validation failures.
pub fn validate(submission: &BookingSubmission) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let required = [
        ("first_name", &submission.first_name),
        ("surname", &submission.surname),
        ("club_school", &submission.club_school),
        ("contact_number", &submission.contact_number),
        ("contact_email", &submission.contact_email),
        ("payment_option", &submission.payment_option),
        ("costing", &submission.costing),
    ];

    for (field, value) in required {
        if non_empty(value).is_none() {
            errors.push(format!("Missing required field: {field}"));
        }
    }

    if let Some(phone) = non_empty(&submission.contact_number)
        && !is_valid_phone(phone)
    {
        errors.push(
            "Invalid contact_number format (expect 0XXXXXXXXX or +27XXXXXXXXX).".to_string(),
        );
    }

    if let Some(email) = non_empty(&submission.contact_email)
        && !is_valid_email(email)
    {
        errors.push("Invalid contact_email format.".to_string());
    }

    if let Some(logo) = non_empty(&submission.logo_image)
        && let Err(error) = check_logo(logo)
    {
        errors.push(error.to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// South African number: `0XXXXXXXXX` or `+27XXXXXXXXX`.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn check_logo(logo: &str) -> Result<(), &'static str> {
    if logo.starts_with("data:") {
        return if logo.contains(',') {
            Ok(())
        } else {
            Err("logo_image data URL malformed.")
        };
    }

    let sample: String = logo.trim().chars().take(LOGO_SAMPLE_CHARS).collect();

    if is_padded_base64(&sample) {
        Ok(())
    } else {
        Err("logo_image not valid base64 (first 200 chars failed).")
    }
}

/// Standard base64 with at most two trailing `=`.
///
/// A final partial group must carry its padding; surplus `=` after a
/// complete group is tolerated.
fn is_padded_base64(sample: &str) -> bool {
    let data = sample.trim_end_matches('=');
    let padding = sample.len() - data.len();

    let required = match data.len() % 4 {
        0 => 0,
        2 => 2,
        3 => 1,
        _ => return false,
    };

    (required..=MAX_LOGO_PADDING).contains(&padding) && LOGO_ENGINE.decode(data).is_ok()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
