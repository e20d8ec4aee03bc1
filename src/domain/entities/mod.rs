//! Core domain entities.
//!
//! - [`TrackingRecord`] - Result of one lookup for one tracking number
//! - [`TrackingEvent`] - Most recent status event recorded by the carrier

pub mod tracking;

pub use tracking::{TrackingEvent, TrackingRecord};
