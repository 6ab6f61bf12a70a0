//! Key probing client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Batch iteration (see [`crate::batch`])
//!
//! # Invariants
//! - One `reqwest::Client` is reused for every probe.
//! - Each probe uses the timeout passed by the caller.

pub mod builder;

use keyprobe_config::ResponseContract;
use std::time::Duration;

use crate::endpoints;
use crate::metrics::MetricsCollector;
use crate::models::ValidationResult;
use crate::validator::KeyValidator;

/// HTTP client that validates api-tennis.com keys.
///
/// ```rust,ignore
/// use keyprobe_client::{KeyProbeClient, KeyValidator};
///
/// let client = KeyProbeClient::builder()
///     .base_url("https://api-tennis.com".to_string())
///     .build()?;
/// let result = client.validate("my-key", Duration::from_secs(10)).await;
/// ```
#[derive(Debug)]
pub struct KeyProbeClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) method: String,
    pub(crate) contract: ResponseContract,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl KeyProbeClient {
    /// Create a new client builder.
    pub fn builder() -> builder::KeyProbeClientBuilder {
        builder::KeyProbeClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The query method sent with every probe.
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn contract(&self) -> ResponseContract {
        self.contract
    }

    pub fn metrics(&self) -> Option<&MetricsCollector> {
        self.metrics.as_ref()
    }
}

impl KeyValidator for KeyProbeClient {
    async fn validate(&self, key: &str, timeout: Duration) -> ValidationResult {
        let result = endpoints::probe_key(
            &self.http,
            &self.base_url,
            &self.method,
            self.contract,
            key,
            timeout,
        )
        .await;

        if let Some(metrics) = &self.metrics {
            metrics.record_probe(&result);
        }
        result
    }
}
