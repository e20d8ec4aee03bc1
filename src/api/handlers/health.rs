//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{HealthResponse, LookupSettings};
use crate::state::AppState;

/// Returns service liveness and the fan-out settings in effect.
///
/// Does not contact the carrier.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "lookup": {
///     "max_concurrency": null,
///     "cancel_on_failure": false
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let options = state.tracking_service.options();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        lookup: LookupSettings {
            max_concurrency: options.max_concurrency.map(|n| n.get()),
            cancel_on_failure: options.cancel_on_failure,
        },
    })
}
