//! # Tracking Gateway
//!
//! HTTP service that resolves a batch of parcel tracking numbers against the
//! carrier's SOAP tracking service and returns the aggregated result as JSON.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Tracking records and the lookup port
//! - **Application Layer** ([`application`]) - Concurrent fan-out and aggregation
//! - **Infrastructure Layer** ([`infrastructure`]) - SOAP client for the carrier
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Batch semantics
//!
//! Every tracking number of a request is looked up concurrently. The batch is
//! all-or-nothing: a transport or protocol failure on any lookup fails the
//! whole request with a generic 500, while a number unknown to the carrier is
//! reported inside its own record.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl http://localhost:8000/tracking_numbers/XX1233FF;PN848933136BR
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{BatchError, BatchOptions, TrackingService};
    pub use crate::domain::entities::{TrackingEvent, TrackingRecord};
    pub use crate::domain::lookup::{LookupError, TrackingLookup};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
