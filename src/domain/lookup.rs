//! Port for the remote tracking lookup.

use async_trait::async_trait;

use crate::domain::entities::TrackingRecord;

/// Transport-level failure of a single lookup.
///
/// Every variant is fatal to the batch that issued the lookup. A tracking
/// number unknown to the carrier is not an error; see
/// [`TrackingRecord::error`].
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Request to tracking service failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Tracking service answered with HTTP status {0}")]
    Status(u16),

    #[error("Malformed tracking service response: {0}")]
    Decode(String),

    #[error("Tracking service response carried no tracking record")]
    MissingRecord,

    #[error("Faultcode: {code}. Faultstring: {message}. Detail: {detail}")]
    Fault {
        code: String,
        message: String,
        detail: String,
    },
}

/// Performs one remote lookup for one tracking number.
///
/// # Implementations
///
/// - [`crate::infrastructure::soap::SoapTrackingClient`] - SOAP client for the carrier
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrackingLookup: Send + Sync {
    /// Looks up a single tracking number.
    ///
    /// No retries are performed. Any string is attempted as-is.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] on network failure, timeout, an undecodable
    /// response or a fault reported by the remote service.
    async fn lookup(&self, tracking_number: &str) -> Result<TrackingRecord, LookupError>;
}
