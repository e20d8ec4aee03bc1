//! Data Transfer Objects for API responses.
//!
//! Field names follow the carrier's vocabulary, which existing clients expect.

pub mod health;
pub mod tracking;
