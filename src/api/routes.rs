//! API route configuration.

use crate::api::handlers::tracking_numbers_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Tracking routes.
///
/// # Endpoints
///
/// - `GET /tracking_numbers/{tracking_numbers}` - Batch lookup of `;`-separated numbers
pub fn tracking_routes() -> Router<AppState> {
    Router::new().route(
        "/tracking_numbers/{tracking_numbers}",
        get(tracking_numbers_handler),
    )
}
