//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use serde_json::{Value, json};

use snugfit_app::domain::bookings::{
    BookingsServiceError, MockBookingsService,
    models::{Booking, BookingSubmission},
};

use crate::state::State;

/// A complete, valid order body for `first_name`.
pub(crate) fn valid_order(first_name: &str) -> Value {
    json!({
        "first_name": first_name,
        "surname": "Mokoena",
        "club_school": "Northside RFC",
        "contact_number": "0821234567",
        "contact_email": "orders@northside.example",
        "payment_option": "EFT",
        "costing": "MG Standard",
        "colour_selection": "Blue",
    })
}

/// Store a valid order directly through the service.
pub(crate) async fn create_valid_booking(
    state: &State,
    first_name: &str,
) -> Result<Booking, BookingsServiceError> {
    let submission = BookingSubmission {
        first_name: Some(first_name.to_string()),
        surname: Some("Mokoena".to_string()),
        club_school: Some("Northside RFC".to_string()),
        contact_number: Some("0821234567".to_string()),
        contact_email: Some("orders@northside.example".to_string()),
        payment_option: Some("EFT".to_string()),
        costing: Some("MG Standard".to_string()),
        colour_selection: Some("Blue".to_string()),
        ..BookingSubmission::default()
    };

    state.bookings.create_booking(submission).await
}

pub(crate) fn state_with_bookings(bookings: MockBookingsService) -> Arc<State> {
    Arc::new(State::new(Arc::new(bookings)))
}

pub(crate) fn bookings_service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}
