//! Order response bodies.

use std::collections::BTreeMap;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use snugfit_app::domain::bookings::models::Booking;

/// A captured order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingResponse {
    /// Proxy order id, e.g. `PX01`
    pub id: String,
    /// Unix seconds at capture
    pub timestamp: i64,
    pub first_name: String,
    pub surname: String,
    pub club_school: String,
    pub contact_number: String,
    pub contact_email: String,
    pub payment_option: String,
    pub costing: String,
    pub colour: String,
    pub additional_notes: String,
    /// First 120 characters of the submitted logo
    pub logo_image_truncated: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id.to_string(),
            timestamp: booking.created_at.as_second(),
            first_name: booking.first_name,
            surname: booking.surname,
            club_school: booking.club_school,
            contact_number: booking.contact_number,
            contact_email: booking.contact_email,
            payment_option: booking.payment_option,
            costing: booking.costing,
            colour: booking.colour,
            additional_notes: booking.additional_notes,
            logo_image_truncated: booking.logo_image_truncated,
        }
    }
}

/// Orders List Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingsResponse {
    pub status: String,
    pub count: usize,
    pub orders: Vec<BookingResponse>,
}

/// Single Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingEnvelope {
    pub status: String,
    pub order: BookingResponse,
}

/// Order Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingCreatedResponse {
    pub status: String,
    pub id: String,
    pub stored_fields: Vec<String>,
    pub message: String,
}

/// Order Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingUpdatedResponse {
    pub status: String,
    pub id: String,
    /// Fields that were written, with their new values
    pub updated: BTreeMap<String, String>,
}
