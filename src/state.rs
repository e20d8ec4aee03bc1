//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::TrackingService;

#[derive(Clone)]
pub struct AppState {
    pub tracking_service: Arc<TrackingService>,
}

impl AppState {
    pub fn new(tracking_service: Arc<TrackingService>) -> Self {
        Self { tracking_service }
    }
}
