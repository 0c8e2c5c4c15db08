//! KPI Summary Handler

use std::{collections::BTreeMap, sync::Arc};

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*, state::State};

/// KPI summary response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct KpisResponse {
    pub status: String,
    pub total_orders: usize,
    pub distinct_costing_types: usize,
    /// Orders per costing category; blank costings count as `Unknown`
    pub costing_breakdown: BTreeMap<String, usize>,
    /// The most common costing, or `null` when there are no orders
    pub example_popular_costing: Option<String>,
}

/// KPI Summary Handler
#[endpoint(tags("orders"), summary = "Order KPIs")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<KpisResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let kpis = state.bookings.booking_kpis().await;

    Ok(Json(KpisResponse {
        status: "ok".to_string(),
        total_orders: kpis.total_orders,
        distinct_costing_types: kpis.distinct_costing_types(),
        example_popular_costing: kpis.popular_costing().map(ToString::to_string),
        costing_breakdown: kpis.costing_breakdown.into_iter().collect(),
    }))
}
