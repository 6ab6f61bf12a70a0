//! Metrics collection for key probes.
//!
//! Records, per probe:
//! - a counter labelled by outcome
//! - a duration histogram labelled by outcome and HTTP status
//!
//! # What this module does NOT handle:
//! - Metrics exposition (see [`crate::metrics_exporter`])
//!
//! # Invariants
//! - Labels never carry key material, masked or not.
//! - Recording is infallible and free when no recorder is installed.

use crate::models::ValidationResult;

/// Metric name for the probe duration histogram.
pub const METRIC_PROBE_DURATION: &str = "keyprobe_probe_duration_seconds";

/// Metric name for the probe counter.
pub const METRIC_PROBES_TOTAL: &str = "keyprobe_probes_total";

/// Metric name for the completed batch counter.
pub const METRIC_BATCHES_TOTAL: &str = "keyprobe_batches_total";

/// Lightweight wrapper around the `metrics` macros with consistent labels.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record one finished probe.
    pub fn record_probe(&self, result: &ValidationResult) {
        if !self.enabled {
            return;
        }

        let outcome = result.outcome.as_str();
        let status_label = result
            .status_code
            .map_or_else(|| "none".to_string(), |s| s.to_string());

        metrics::counter!(METRIC_PROBES_TOTAL, "outcome" => outcome).increment(1);
        metrics::histogram!(METRIC_PROBE_DURATION,
            "outcome" => outcome,
            "status" => status_label,
        )
        .record(result.elapsed_seconds());
    }

    /// Record a finished (or cancelled) batch.
    pub fn record_batch(&self, cancelled: bool) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_BATCHES_TOTAL,
            "cancelled" => if cancelled { "true" } else { "false" },
        )
        .increment(1);
    }
}
