//! Batch tracking service: concurrent fan-out and aggregation of lookups.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::domain::entities::TrackingRecord;
use crate::domain::lookup::{LookupError, TrackingLookup};

/// Failure of a whole batch.
///
/// Carries the first failing lookup, in completion order. The detail is meant
/// for server-side logs only.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("Lookup for '{tracking_number}' failed: {source}")]
    Lookup {
        tracking_number: String,
        #[source]
        source: LookupError,
    },

    #[error("Lookup worker failed: {0}")]
    Worker(String),
}

/// Fan-out tuning for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Upper bound on lookups in flight. `None` runs every lookup at once.
    pub max_concurrency: Option<NonZeroUsize>,
    /// Abort the remaining lookups as soon as one fails.
    pub cancel_on_failure: bool,
}

struct Outcome {
    tracking_number: String,
    result: Result<TrackingRecord, LookupError>,
}

/// Service resolving batches of tracking numbers.
///
/// Each batch is all-or-nothing: either every lookup produced a
/// [`TrackingRecord`] or the batch fails with a single [`BatchError`] and any
/// records already collected are discarded. A number unknown to the carrier
/// still produces a record and does not fail the batch.
pub struct TrackingService {
    lookup: Arc<dyn TrackingLookup>,
    options: BatchOptions,
}

impl TrackingService {
    /// Creates a new tracking service.
    pub fn new(lookup: Arc<dyn TrackingLookup>, options: BatchOptions) -> Self {
        Self { lookup, options }
    }

    pub fn options(&self) -> BatchOptions {
        self.options
    }

    /// Looks up every tracking number concurrently and aggregates the results.
    ///
    /// One task is spawned per tracking number. Outcomes are collected from the
    /// [`JoinSet`] as tasks finish, so this task is the only place results and
    /// errors are merged, and a panicking worker is seen as soon as it ends.
    /// The call returns only after every spawned task has been joined, even
    /// when a failure is already known.
    ///
    /// Records are returned in completion order, not input order.
    ///
    /// # Errors
    ///
    /// Returns the first [`BatchError`] observed, in completion order. Later
    /// failures are logged and dropped.
    pub async fn run_batch(
        &self,
        tracking_numbers: Vec<String>,
    ) -> Result<Vec<TrackingRecord>, BatchError> {
        if tracking_numbers.is_empty() {
            return Ok(Vec::new());
        }

        let started = Instant::now();
        let total = tracking_numbers.len();
        let limiter = self
            .options
            .max_concurrency
            .map(|n| Arc::new(Semaphore::new(n.get())));

        let mut workers = JoinSet::new();

        for tracking_number in tracking_numbers {
            let lookup = Arc::clone(&self.lookup);
            let limiter = limiter.clone();

            workers.spawn(async move {
                let _permit = match limiter {
                    Some(semaphore) => Some(semaphore.acquire_owned().await.ok()?),
                    None => None,
                };

                let result = lookup.lookup(&tracking_number).await;
                Some(Outcome {
                    tracking_number,
                    result,
                })
            });
        }

        let mut records = Vec::with_capacity(total);
        let mut failure: Option<BatchError> = None;

        while let Some(joined) = workers.join_next().await {
            let error = match joined {
                Ok(Some(Outcome {
                    result: Ok(record), ..
                })) => {
                    if failure.is_none() {
                        records.push(record);
                    }
                    continue;
                }
                Ok(Some(Outcome {
                    tracking_number,
                    result: Err(source),
                })) => BatchError::Lookup {
                    tracking_number,
                    source,
                },
                // Semaphore closed; counted as a missing outcome below.
                Ok(None) => continue,
                Err(e) if e.is_cancelled() => continue,
                Err(e) => BatchError::Worker(e.to_string()),
            };

            if failure.is_some() {
                warn!(error = %error, "Additional lookup failure ignored");
                continue;
            }

            debug!(error = %error, "First lookup failure in batch");
            failure = Some(error);

            if self.options.cancel_on_failure {
                workers.abort_all();
            }
        }

        let elapsed_ms = started.elapsed().as_millis() as u64;

        if let Some(err) = failure {
            info!(total, elapsed_ms, outcome = "failed", "Batch finished");
            return Err(err);
        }

        if records.len() != total {
            info!(total, elapsed_ms, outcome = "incomplete", "Batch finished");
            return Err(BatchError::Worker(format!(
                "{} of {} lookups reported no outcome",
                total - records.len(),
                total
            )));
        }

        info!(total, elapsed_ms, outcome = "ok", "Batch finished");
        Ok(records)
    }
}
