//! Order request bodies.

use serde::{Deserialize, Deserializer};

use snugfit_app::domain::bookings::models::{BookingSubmission, BookingUpdate};

/// Create Order Request
///
/// Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CreateBookingRequest {
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

impl From<CreateBookingRequest> for BookingSubmission {
    fn from(request: CreateBookingRequest) -> Self {
        BookingSubmission {
            first_name: request.first_name,
            surname: request.surname,
            club_school: request.club_school,
            contact_number: request.contact_number,
            contact_email: request.contact_email,
            payment_option: request.payment_option,
            costing: request.costing,
            colour: request.colour,
            colour_selection: request.colour_selection,
            logo_image: request.logo_image,
            additional_notes: request.additional_notes,
        }
    }
}

/// Update Order Request
///
/// An absent key leaves the field alone; an explicit `null` clears it.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct UpdateBookingRequest {
    #[serde(default, deserialize_with = "present")]
    pub first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub surname: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub club_school: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub contact_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub contact_email: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub payment_option: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub costing: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub colour: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub colour_selection: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub logo_image: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub additional_notes: Option<Option<String>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl From<UpdateBookingRequest> for BookingUpdate {
    fn from(request: UpdateBookingRequest) -> Self {
        BookingUpdate {
            first_name: request.first_name,
            surname: request.surname,
            club_school: request.club_school,
            contact_number: request.contact_number,
            contact_email: request.contact_email,
            payment_option: request.payment_option,
            costing: request.costing,
            colour: request.colour,
            colour_selection: request.colour_selection,
            logo_image: request.logo_image,
            additional_notes: request.additional_notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn update_distinguishes_absent_from_null() -> TestResult {
        let request: UpdateBookingRequest =
            serde_json::from_value(json!({ "colour": null, "costing": "Ortho (T)" }))?;

        assert_eq!(request.colour, Some(None));
        assert_eq!(request.costing, Some(Some("Ortho (T)".to_string())));
        assert_eq!(request.surname, None);

        Ok(())
    }

    #[test]
    fn create_ignores_unknown_keys() -> TestResult {
        let request: CreateBookingRequest =
            serde_json::from_value(json!({ "first_name": "Thandi", "shoe_size": "7" }))?;

        assert_eq!(request.first_name.as_deref(), Some("Thandi"));

        Ok(())
    }

    #[test]
    fn non_string_fields_are_rejected() {
        let result = serde_json::from_value::<CreateBookingRequest>(json!({ "surname": 42 }));

        assert!(result.is_err(), "numbers are not accepted as field values");
    }
}
