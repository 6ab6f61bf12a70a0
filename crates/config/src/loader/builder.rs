//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables when applied after `from_env()`.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - The built base URL never ends with a slash.

use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_PROBE_METHOD, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS,
    MIN_TIMEOUT_SECS,
};
use crate::types::{Config, EndpointConfig, ResponseContract};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    method: Option<String>,
    contract: Option<ResponseContract>,
    timeout_secs: Option<f64>,
    skip_verify: Option<bool>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    /// Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from `KEYPROBE_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the query method used for the probe request.
    pub fn with_method(mut self, method: String) -> Self {
        self.method = Some(method);
        self
    }

    /// Set the response contract.
    pub fn with_contract(mut self, contract: ResponseContract) -> Self {
        self.contract = Some(contract);
        self
    }

    /// Set the per-request timeout in seconds.
    pub fn with_timeout_secs(mut self, secs: f64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = validate_and_normalize_base_url(
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )?;

        let method = self
            .method
            .unwrap_or_else(|| DEFAULT_PROBE_METHOD.to_string());
        validate_method(&method)?;

        let timeout = validate_timeout(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))?;

        Ok(Config {
            endpoint: EndpointConfig {
                base_url,
                method,
                skip_verify: self.skip_verify.unwrap_or(false),
            },
            timeout,
            contract: self.contract.unwrap_or_default(),
        })
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_method(&mut self, method: Option<String>) {
        self.method = method;
    }

    pub(crate) fn set_contract(&mut self, contract: Option<ResponseContract>) {
        self.contract = contract;
    }

    pub(crate) fn set_timeout_secs(&mut self, secs: Option<f64>) {
        self.timeout_secs = secs;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }
}

/// Validate a base URL and strip trailing slashes.
///
/// Only `http` and `https` URLs with a host are accepted.
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
        url: trimmed.to_string(),
        message: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBaseUrl {
            url: trimmed.to_string(),
            message: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidBaseUrl {
            url: trimmed.to_string(),
            message: "missing host".to_string(),
        });
    }
    if parsed.query().is_some() {
        return Err(ConfigError::InvalidBaseUrl {
            url: trimmed.to_string(),
            message: "must not contain a query string".to_string(),
        });
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

fn validate_method(method: &str) -> Result<(), ConfigError> {
    let valid = !method.is_empty()
        && method
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidMethod(method.to_string()))
    }
}

/// Validate the timeout against the accepted bounds.
fn validate_timeout(secs: f64) -> Result<Duration, ConfigError> {
    if !secs.is_finite() {
        return Err(ConfigError::InvalidTimeout {
            message: "timeout must be a finite number of seconds".to_string(),
        });
    }
    if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&secs) {
        return Err(ConfigError::InvalidTimeout {
            message: format!(
                "timeout must be between {} and {} seconds (got {})",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, secs
            ),
        });
    }
    Ok(Duration::from_secs_f64(secs))
}
