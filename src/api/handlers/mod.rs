//! HTTP request handlers for API endpoints.

pub mod health;
pub mod tracking;

pub use health::health_handler;
pub use tracking::{not_found_handler, tracking_numbers_handler};
