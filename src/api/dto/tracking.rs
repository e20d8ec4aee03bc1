//! DTOs for the batch tracking endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{TrackingEvent, TrackingRecord};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackingEventDto {
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "descricao")]
    pub description: String,
}

/// One tracking record as exposed to clients.
///
/// `evento` is serialized as `null` when the carrier has no event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackingRecordDto {
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "erro")]
    pub error: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "evento")]
    pub event: Option<TrackingEventDto>,
}

/// Successful batch response: `{"objetos": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackingResponse {
    #[serde(rename = "objetos")]
    pub records: Vec<TrackingRecordDto>,
}

impl From<TrackingEvent> for TrackingEventDto {
    fn from(event: TrackingEvent) -> Self {
        Self {
            date: event.date,
            time: event.time,
            description: event.description,
        }
    }
}

impl From<TrackingRecord> for TrackingRecordDto {
    fn from(record: TrackingRecord) -> Self {
        Self {
            number: record.number,
            error: record.error,
            name: record.name,
            event: record.event.map(Into::into),
        }
    }
}

impl From<Vec<TrackingRecord>> for TrackingResponse {
    fn from(records: Vec<TrackingRecord>) -> Self {
        Self {
            records: records.into_iter().map(Into::into).collect(),
        }
    }
}
