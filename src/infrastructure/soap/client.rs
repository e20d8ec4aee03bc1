//! reqwest-backed SOAP client for the carrier tracking service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use super::envelope::{SoapCredentials, SoapReply, build_request, parse_response};
use crate::config::Config;
use crate::domain::entities::TrackingRecord;
use crate::domain::lookup::{LookupError, TrackingLookup};

const SOAP_ACTION: &str = "\"buscaEventosLista\"";
const XML_CONTENT_TYPE: &str = "text/xml;charset=UTF-8";

/// SOAP client issuing one `buscaEventosLista` call per tracking number.
///
/// The underlying [`reqwest::Client`] is built once and shared, so connections
/// to the carrier are pooled across lookups and batches.
#[derive(Debug, Clone)]
pub struct SoapTrackingClient {
    client: Client,
    endpoint: String,
    credentials: SoapCredentials,
}

impl SoapTrackingClient {
    /// Creates a client for `endpoint` with a total per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the HTTP client cannot be initialized.
    pub fn new(
        endpoint: impl Into<String>,
        credentials: SoapCredentials,
        timeout: Duration,
    ) -> Result<Self, LookupError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            credentials,
        })
    }

    /// Creates a client from service configuration.
    pub fn from_config(config: &Config) -> Result<Self, LookupError> {
        Self::new(
            config.soap_url.clone(),
            SoapCredentials::new(config.soap_user.clone(), config.soap_password.clone()),
            Duration::from_secs(config.lookup_timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TrackingLookup for SoapTrackingClient {
    async fn lookup(&self, tracking_number: &str) -> Result<TrackingRecord, LookupError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, XML_CONTENT_TYPE)
            .header("SOAPAction", SOAP_ACTION)
            .body(build_request(&self.credentials, tracking_number))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        debug!(
            tracking_number,
            status = status.as_u16(),
            bytes = body.len(),
            "Tracking service responded"
        );

        // Faults are delivered with HTTP 500, so the body is decoded first.
        let reply = match parse_response(&body) {
            Ok(reply) => reply,
            Err(_) if !status.is_success() => return Err(LookupError::Status(status.as_u16())),
            Err(e) => return Err(e),
        };

        match reply {
            SoapReply::Record(record) => Ok(record),
            SoapReply::Fault {
                code,
                message,
                detail,
            } => Err(LookupError::Fault {
                code,
                message,
                detail,
            }),
            SoapReply::Empty if !status.is_success() => Err(LookupError::Status(status.as_u16())),
            SoapReply::Empty => Err(LookupError::MissingRecord),
        }
    }
}
