//! Create Order Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};
use tracing::info;

use snugfit_app::domain::bookings::models::Booking;

use crate::{
    bookings::{requests::CreateBookingRequest, responses::BookingCreatedResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

const CAPTURED_MESSAGE: &str = "Order captured in proxy (not forwarded).";

/// Create Order Handler
///
/// Validates and stores a submitted order under the next `PX` id.
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order captured"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BookingCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request: CreateBookingRequest = req.json_object().await?;

    let booking = state.bookings.create_booking(request.into()).await?;

    res.add_header(LOCATION, format!("/api/orders/{}", booking.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    info!(id = %booking.id, "order captured");

    Ok(Json(BookingCreatedResponse {
        status: "success".to_string(),
        id: booking.id.to_string(),
        stored_fields: Booking::STORED_FIELDS.iter().map(ToString::to_string).collect(),
        message: CAPTURED_MESSAGE.to_string(),
    }))
}
