//! Carrier tracking web service over SOAP.
//!
//! Provides the production [`crate::domain::lookup::TrackingLookup`]:
//! - [`SoapTrackingClient`] - reqwest-backed client, one POST per tracking number
//! - [`envelope`] - request templating and response decoding

pub mod client;
pub mod envelope;

pub use client::SoapTrackingClient;
pub use envelope::{SoapCredentials, SoapReply};
