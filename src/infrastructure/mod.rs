//! Infrastructure layer with external integrations.
//!
//! - [`soap`] - SOAP client for the carrier's tracking web service
//!   implementing [`crate::domain::lookup::TrackingLookup`]

pub mod soap;
