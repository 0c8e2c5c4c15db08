//! Orders Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    bookings::responses::{BookingResponse, BookingsResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// List Orders Handler
///
/// Every captured order, oldest first.
#[endpoint(tags("orders"), summary = "List Orders")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<BookingsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let orders: Vec<BookingResponse> = state
        .bookings
        .list_bookings()
        .await
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(BookingsResponse {
        status: "ok".to_string(),
        count: orders.len(),
        orders,
    }))
}
