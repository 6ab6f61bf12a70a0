//! Builder for [`KeyProbeClient`].

use keyprobe_config::constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_PROBE_METHOD};
use keyprobe_config::{Config, ResponseContract};

use crate::client::KeyProbeClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Builder for creating a new [`KeyProbeClient`].
#[derive(Debug)]
pub struct KeyProbeClientBuilder {
    base_url: Option<String>,
    method: String,
    contract: ResponseContract,
    skip_verify: bool,
    metrics: Option<MetricsCollector>,
}

impl Default for KeyProbeClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            method: DEFAULT_PROBE_METHOD.to_string(),
            contract: ResponseContract::default(),
            skip_verify: false,
            metrics: None,
        }
    }
}

impl KeyProbeClientBuilder {
    /// Create a new client builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL (e.g., `https://api-tennis.com`).
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the query method used for the probe. Defaults to `get_countries`.
    pub fn method(mut self, method: String) -> Self {
        self.method = method;
        self
    }

    /// Select the response contract that decides success.
    pub fn contract(mut self, contract: ResponseContract) -> Self {
        self.contract = contract;
        self
    }

    /// Skip TLS certificate verification.
    ///
    /// Only meaningful for HTTPS base URLs.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Record probe metrics through the given collector.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Pre-configure the builder from a loaded [`Config`].
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.endpoint.base_url.clone());
        self.method = config.endpoint.method.clone();
        self.contract = config.contract;
        self.skip_verify = config.endpoint.skip_verify;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://api-tennis.com/"` -> `"https://api-tennis.com"`
    /// - `"http://127.0.0.1:8080//"` -> `"http://127.0.0.1:8080"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`KeyProbeClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is missing or not http(s).
    /// Returns [`ClientError::InvalidMethod`] if the method is empty or not URL-safe.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<KeyProbeClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let is_https = base_url.starts_with("https://");
        if !is_https && !base_url.starts_with("http://") {
            return Err(ClientError::InvalidUrl(format!(
                "'{}' must start with http:// or https://",
                base_url
            )));
        }

        if self.method.is_empty()
            || !self
                .method
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ClientError::InvalidMethod(self.method));
        }

        let mut http_builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if is_https {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(KeyProbeClient {
            http,
            base_url,
            method: self.method,
            contract: self.contract,
            metrics: self.metrics,
        })
    }
}
