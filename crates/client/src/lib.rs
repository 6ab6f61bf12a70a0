//! api-tennis.com key probing client.
//!
//! This crate checks API keys against the api-tennis.com REST API. Each key
//! is validated with a single lightweight GET request and the response is
//! classified into a pass/fail verdict. Batches are processed strictly one
//! key at a time.

pub mod batch;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod mask;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;
mod serde_helpers;
pub mod tracing;
mod validator;

pub use batch::{
    BatchEntry, BatchError, BatchReport, BatchRunner, NoProgress, ProgressObserver, parse_keys,
};
pub use client::KeyProbeClient;
pub use client::builder::KeyProbeClientBuilder;
pub use error::{ClientError, Result};
pub use mask::{mask_key, mask_key_with};
pub use self::metrics::MetricsCollector;
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{Outcome, ValidationResult};
pub use self::tracing::{TracingConfig, TracingError, TracingGuard};
pub use validator::KeyValidator;
