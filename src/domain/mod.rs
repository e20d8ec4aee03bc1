//! Domain layer containing the tracking data model and the lookup port.
//!
//! # Architecture
//!
//! - [`entities`] - Tracking records and events as returned by the carrier
//! - [`lookup`] - The [`lookup::TrackingLookup`] trait implemented by the
//!   infrastructure layer, plus its transport-level error type
//!
//! The domain layer knows nothing about axum, SOAP or XML. The one outside type
//! it carries is the `reqwest::Error` behind [`lookup::LookupError::Http`], so
//! callers can inspect timeouts and connection failures. Services in
//! [`crate::application::services`] only talk to the carrier through
//! [`lookup::TrackingLookup`].

pub mod entities;
pub mod lookup;
