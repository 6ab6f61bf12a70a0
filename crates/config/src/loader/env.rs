//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `KEYPROBE_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Unparseable values return ConfigError::InvalidValue.

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::ResponseContract;

pub const ENV_BASE_URL: &str = "KEYPROBE_BASE_URL";
pub const ENV_METHOD: &str = "KEYPROBE_METHOD";
pub const ENV_CONTRACT: &str = "KEYPROBE_CONTRACT";
pub const ENV_TIMEOUT: &str = "KEYPROBE_TIMEOUT";
pub const ENV_SKIP_VERIFY: &str = "KEYPROBE_SKIP_VERIFY";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader.set_base_url(Some(url));
    }
    if let Some(method) = env_var_or_none(ENV_METHOD) {
        loader.set_method(Some(method));
    }
    if let Some(contract) = env_var_or_none(ENV_CONTRACT) {
        let contract: ResponseContract =
            contract
                .parse()
                .map_err(|message| ConfigError::InvalidValue {
                    var: ENV_CONTRACT.to_string(),
                    message,
                })?;
        loader.set_contract(Some(contract));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: f64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number of seconds".to_string(),
        })?;
        loader.set_timeout_secs(Some(secs));
    }
    if let Some(skip) = env_var_or_none(ENV_SKIP_VERIFY) {
        loader.set_skip_verify(Some(skip.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: ENV_SKIP_VERIFY.to_string(),
                message: "must be true or false".to_string(),
            }
        })?));
    }
    Ok(())
}
