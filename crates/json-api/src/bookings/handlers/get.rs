//! Get Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use snugfit_app::domain::bookings::models::BookingId;

use crate::{
    bookings::responses::BookingEnvelope, errors::ApiError, extensions::*, state::State,
};

/// Get Order Handler
#[endpoint(tags("orders"), summary = "Get Order")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<BookingEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = BookingId::from(id.into_inner());

    let booking = state.bookings.get_booking(&id).await?;

    Ok(Json(BookingEnvelope {
        status: "ok".to_string(),
        order: booking.into(),
    }))
}
