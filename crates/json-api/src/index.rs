//! Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

const ENDPOINTS: [&str; 3] = ["/api/orders", "/api/orders/<id>", "/api/kpis"];

/// Index response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IndexResponse {
    pub status: String,
    pub message: String,
    pub endpoints: Vec<String>,
}

/// Index handler
///
/// Lists the available endpoints.
#[endpoint(tags("health"), summary = "API index")]
pub(crate) async fn handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        status: "ok".to_string(),
        message: "Proxy API running".to_string(),
        endpoints: ENDPOINTS.iter().map(ToString::to_string).collect(),
    })
}
