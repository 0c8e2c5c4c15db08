//! Bookings service errors.

use thiserror::Error;

use crate::domain::bookings::models::BookingId;

#[derive(Debug, Error)]
pub enum BookingsServiceError {
    #[error("order {0} not found")]
    NotFound(BookingId),

    #[error("invalid booking: {}", .0.join("; "))]
    Invalid(Vec<String>),
}
