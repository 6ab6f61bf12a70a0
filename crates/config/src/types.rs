//! Configuration types for keyprobe.
//!
//! Responsibilities:
//! - Define the endpoint settings (base URL, query method, TLS verification).
//! - Define the response contract that decides whether a key works.
//! - Define the main `Config` structure combining endpoint, timeout and contract.
//!
//! Does NOT handle:
//! - Configuration loading from env/CLI (see `loader` module).
//! - Actual network requests (see client crate).
//!
//! Invariants:
//! - Durations are serialized as fractional seconds.
//! - `Config::default()` targets the public api-tennis.com endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_PROBE_METHOD, DEFAULT_TIMEOUT_SECS};

/// Module for serializing Duration as fractional seconds.
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs_f64().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}

/// Which rule in the response body decides that a key works.
///
/// The provider exposes two response shapes depending on the endpoint. The
/// two rules are not interchangeable, so exactly one is selected per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResponseContract {
    /// Top-level `success` field must be the integer `1`.
    #[default]
    #[serde(rename = "success")]
    SuccessFlag,
    /// Top-level `result` key must be present.
    #[serde(rename = "result")]
    ResultKey,
}

impl ResponseContract {
    /// Returns the string label for this contract.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ResponseContract::SuccessFlag => "success",
            ResponseContract::ResultKey => "result",
        }
    }
}

impl fmt::Display for ResponseContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseContract {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "success" | "success-flag" | "success_flag" => Ok(ResponseContract::SuccessFlag),
            "result" | "result-key" | "result_key" => Ok(ResponseContract::ResultKey),
            other => Err(format!(
                "unknown response contract '{}'. Valid options: success, result",
                other
            )),
        }
    }
}

/// Endpoint settings for the probe request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Base URL of the API (e.g., https://api-tennis.com), without trailing slash
    pub base_url: String,
    /// Value of the `method` query parameter (e.g., get_countries)
    pub method: String,
    /// Whether to skip TLS verification (for intercepting proxies in development)
    pub skip_verify: bool,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            method: DEFAULT_PROBE_METHOD.to_string(),
            skip_verify: false,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub endpoint: EndpointConfig,
    /// Per-request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    pub contract: ResponseContract,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig::default(),
            timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
            contract: ResponseContract::default(),
        }
    }
}

impl Config {
    /// Create a config pointing at a specific base URL with default settings.
    ///
    /// Mostly useful for tests that target a local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            endpoint: EndpointConfig {
                base_url: base_url.into(),
                ..EndpointConfig::default()
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_api_tennis() {
        let config = Config::default();
        assert_eq!(config.endpoint.base_url, "https://api-tennis.com");
        assert_eq!(config.endpoint.method, "get_countries");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.contract, ResponseContract::SuccessFlag);
        assert!(!config.endpoint.skip_verify);
    }

    #[test]
    fn test_contract_from_str() {
        assert_eq!(
            "success".parse::<ResponseContract>().unwrap(),
            ResponseContract::SuccessFlag
        );
        assert_eq!(
            " RESULT ".parse::<ResponseContract>().unwrap(),
            ResponseContract::ResultKey
        );
        assert!("truthy".parse::<ResponseContract>().is_err());
    }

    #[test]
    fn test_config_serializes_timeout_as_seconds() {
        let mut config = Config::with_base_url("http://localhost:9999");
        config.timeout = Duration::from_millis(2500);

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["timeout"], serde_json::json!(2.5));
        assert_eq!(json["contract"], "success");

        let back: Config = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }
}
