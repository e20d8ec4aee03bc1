//! Application layer services implementing the batch lookup logic.
//!
//! Services consume the [`crate::domain::lookup::TrackingLookup`] port and
//! provide a clean API for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::tracking_service::TrackingService`] - Concurrent fan-out and
//!   all-or-nothing aggregation of tracking lookups

pub mod services;
