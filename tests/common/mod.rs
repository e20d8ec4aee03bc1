#![allow(dead_code)]

use async_trait::async_trait;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracking_gateway::application::services::{BatchOptions, TrackingService};
use tracking_gateway::domain::entities::{TrackingEvent, TrackingRecord};
use tracking_gateway::domain::lookup::{LookupError, TrackingLookup};
use tracking_gateway::state::AppState;

pub const NOT_FOUND_MESSAGE: &str = "Objeto não encontrado na base de dados dos Correios.";

/// Deterministic stand-in for the carrier.
///
/// Known numbers resolve to their configured record, failing numbers return a
/// fault, everything else resolves to a not-found record.
#[derive(Default)]
pub struct StubLookup {
    found: HashMap<String, TrackingRecord>,
    failing: HashSet<String>,
    max_latency_ms: u64,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl StubLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_found(mut self, record: TrackingRecord) -> Self {
        self.found.insert(record.number.clone(), record);
        self
    }

    pub fn with_failure(mut self, number: &str) -> Self {
        self.failing.insert(number.to_string());
        self
    }

    pub fn with_random_latency(mut self, max_latency_ms: u64) -> Self {
        self.max_latency_ms = max_latency_ms;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TrackingLookup for StubLookup {
    async fn lookup(&self, tracking_number: &str) -> Result<TrackingRecord, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(current, Ordering::SeqCst);

        if self.max_latency_ms > 0 {
            let delay = rand::rng().random_range(0..=self.max_latency_ms);
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.contains(tracking_number) {
            return Err(LookupError::Fault {
                code: "soap:Server".to_string(),
                message: "Servico indisponivel".to_string(),
                detail: tracking_number.to_string(),
            });
        }

        Ok(self
            .found
            .get(tracking_number)
            .cloned()
            .unwrap_or_else(|| TrackingRecord::not_found(tracking_number, NOT_FOUND_MESSAGE)))
    }
}

pub fn delivered_record(number: &str) -> TrackingRecord {
    TrackingRecord::new(
        number.to_string(),
        String::new(),
        "ENCOMENDA PAC".to_string(),
        Some(TrackingEvent::new(
            "20/02/2017".to_string(),
            "15:43".to_string(),
            "Objeto entregue ao destinatário".to_string(),
        )),
    )
}

pub fn create_test_state(lookup: Arc<StubLookup>, options: BatchOptions) -> AppState {
    let tracking_service = Arc::new(TrackingService::new(lookup, options));
    AppState::new(tracking_service)
}
