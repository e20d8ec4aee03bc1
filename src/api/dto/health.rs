//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub lookup: LookupSettings,
}

/// Fan-out settings the service is running with.
#[derive(Debug, Serialize)]
pub struct LookupSettings {
    pub max_concurrency: Option<usize>,
    pub cancel_on_failure: bool,
}
