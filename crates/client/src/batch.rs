//! Sequential batch validation.
//!
//! Responsibilities:
//! - Split raw multi-line input into keys.
//! - Validate keys one at a time, in input order, reporting progress.
//! - Aggregate verdicts into a [`BatchReport`].
//!
//! Does NOT handle:
//! - Performing the HTTP request (see [`crate::KeyValidator`]).
//! - Rendering or exporting results (CLI formatters).
//!
//! Invariants:
//! - At most one validation is in flight; key `i + 1` starts after key `i` finished.
//! - An empty batch is an error and performs no validation.
//! - `ok_count() + fail_count() == entries.len()`.
//! - Raw keys never appear in the report; entries carry the masked form only.

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

use crate::mask::mask_key;
use crate::metrics::MetricsCollector;
use crate::models::ValidationResult;
use crate::serde_helpers::duration_as_secs;
use crate::validator::KeyValidator;

/// Errors that stop a batch before any key is checked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    /// No non-blank key was supplied.
    #[error("No API keys provided. Enter at least one key.")]
    EmptyInput,
}

/// Split text into keys: one per line, trimmed, blank lines dropped.
pub fn parse_keys(text: &str) -> Vec<SecretString> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| SecretString::new(line.to_string().into()))
        .collect()
}

/// Receives progress from a running batch.
///
/// Called synchronously on the runner's task between validations.
pub trait ProgressObserver {
    /// Called before validation of a key starts. `index` is zero-based.
    fn on_key_started(&mut self, _index: usize, _masked_key: &str) {}

    /// Called after each key with the number of completed keys.
    fn on_progress(&mut self, completed: usize, total: usize);

    /// Polled before each key; returning `true` stops the batch.
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Observer that ignores progress and never cancels.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _completed: usize, _total: usize) {}
}

/// One key's verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    pub masked_key: String,
    #[serde(flatten)]
    pub result: ValidationResult,
}

/// Ordered verdicts for one run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
    /// Number of keys submitted, including any skipped by cancellation.
    pub total_requested: usize,
    pub cancelled: bool,
    #[serde(rename = "elapsed_seconds", serialize_with = "duration_as_secs")]
    pub elapsed: Duration,
    pub started_at: DateTime<Utc>,
}

impl BatchReport {
    pub fn ok_count(&self) -> usize {
        self.entries.iter().filter(|e| e.result.ok).count()
    }

    pub fn fail_count(&self) -> usize {
        self.entries.len() - self.ok_count()
    }

    /// Entries whose key failed validation, in input order.
    pub fn failures(&self) -> impl Iterator<Item = &BatchEntry> {
        self.entries.iter().filter(|e| !e.result.ok)
    }

    /// True when every submitted key was checked and passed.
    pub fn all_ok(&self) -> bool {
        !self.cancelled && self.fail_count() == 0 && self.entries.len() == self.total_requested
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Runs a [`KeyValidator`] over a list of keys, one at a time.
pub struct BatchRunner<'a, V: KeyValidator> {
    validator: &'a V,
    timeout: Duration,
    metrics: Option<MetricsCollector>,
}

impl<'a, V: KeyValidator> BatchRunner<'a, V> {
    pub fn new(validator: &'a V, timeout: Duration) -> Self {
        Self {
            validator,
            timeout,
            metrics: None,
        }
    }

    /// Record batch-level metrics through the given collector.
    pub fn with_metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Validate every key in order.
    ///
    /// Blank keys are dropped before the run starts.
    ///
    /// # Errors
    /// Returns [`BatchError::EmptyInput`] when no non-blank key remains.
    pub async fn run<O>(
        &self,
        keys: &[SecretString],
        observer: &mut O,
    ) -> Result<BatchReport, BatchError>
    where
        O: ProgressObserver + ?Sized,
    {
        let keys: Vec<&str> = keys
            .iter()
            .map(|k| k.expose_secret().trim())
            .filter(|k| !k.is_empty())
            .collect();

        if keys.is_empty() {
            return Err(BatchError::EmptyInput);
        }

        let total = keys.len();
        let started_at = Utc::now();
        let started = Instant::now();
        let mut entries = Vec::with_capacity(total);
        let mut cancelled = false;

        info!(total, "Starting key validation batch");

        for (index, key) in keys.into_iter().enumerate() {
            if observer.is_cancelled() {
                debug!(completed = index, total, "Batch cancelled");
                cancelled = true;
                break;
            }

            let masked_key = mask_key(key);
            observer.on_key_started(index, &masked_key);

            let result = self.validator.validate(key, self.timeout).await;
            debug!(key = %masked_key, ok = result.ok, "Key checked");

            entries.push(BatchEntry { masked_key, result });
            observer.on_progress(index + 1, total);
        }

        let report = BatchReport {
            entries,
            total_requested: total,
            cancelled,
            elapsed: started.elapsed(),
            started_at,
        };

        if let Some(metrics) = &self.metrics {
            metrics.record_batch(cancelled);
        }

        info!(
            ok = report.ok_count(),
            failed = report.fail_count(),
            cancelled,
            "Key validation batch finished"
        );

        Ok(report)
    }

    /// Parse multi-line text with [`parse_keys`] and run the batch.
    pub async fn run_text<O>(&self, text: &str, observer: &mut O) -> Result<BatchReport, BatchError>
    where
        O: ProgressObserver + ?Sized,
    {
        self.run(&parse_keys(text), observer).await
    }
}
