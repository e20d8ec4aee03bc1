//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /tracking_numbers/{tracking_numbers}` - Batch tracking lookup
//! - `GET /health`                              - Liveness and fan-out settings
//!
//! Unknown routes answer 404 with `{"error": "Resource not found"}`.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::tracking_routes())
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
