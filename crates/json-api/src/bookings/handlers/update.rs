//! Update Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use snugfit_app::domain::bookings::models::BookingId;

use crate::{
    bookings::{requests::UpdateBookingRequest, responses::BookingUpdatedResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Update Order Handler
///
/// Applies only the keys present in the body. The stored order is left
/// untouched when the result would be invalid.
#[endpoint(tags("orders"), summary = "Update Order")]
#[tracing::instrument(
    name = "orders.update",
    skip(id, req, depot),
    fields(order_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<BookingUpdatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = BookingId::from(id.into_inner());

    tracing::Span::current().record("order_id", tracing::field::display(&id));

    let request: UpdateBookingRequest = req.json_object().await?;

    let updated = state.bookings.update_booking(&id, request.into()).await?;

    tracing::info!(order_id = %id, fields = updated.len(), "updated order");

    Ok(Json(BookingUpdatedResponse {
        status: "success".to_string(),
        id: id.to_string(),
        updated,
    }))
}
