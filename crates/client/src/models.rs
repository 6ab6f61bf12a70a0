//! Data models for key validation results.
//!
//! Responsibilities:
//! - Define the per-key [`ValidationResult`] and its [`Outcome`] classification.
//! - Parse probe response bodies into a typed envelope.
//!
//! Does NOT handle:
//! - Performing HTTP requests (see [`crate::endpoints`]).
//! - Rendering results (see the CLI formatters).
//!
//! Invariants:
//! - `ok` is true exactly when `outcome == Outcome::Success`.
//! - `raw_error_snippet` is only set on failures where a non-empty body was received.
//! - `status_code` is absent for timeouts and network failures.

use keyprobe_config::constants::ERROR_SNIPPET_MAX_CHARS;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

use crate::serde_helpers::duration_as_secs;

/// Terminal classification of a single key check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// HTTP 200 and the response contract is satisfied.
    Success,
    /// No response within the timeout.
    Timeout,
    /// Any other transport-level failure (DNS, refused connection, TLS).
    NetworkFailure,
    /// A status other than 200.
    HttpError,
    /// HTTP 200 but the body is not a JSON object.
    MalformedResponse,
    /// HTTP 200 with a JSON object that does not satisfy the contract.
    LogicalFailure,
}

impl Outcome {
    /// Returns the string label for this outcome.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Timeout => "timeout",
            Outcome::NetworkFailure => "network_failure",
            Outcome::HttpError => "http_error",
            Outcome::MalformedResponse => "malformed_response",
            Outcome::LogicalFailure => "logical_failure",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for one key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub ok: bool,
    pub outcome: Outcome,
    pub status_code: Option<u16>,
    #[serde(rename = "elapsed_seconds", serialize_with = "duration_as_secs")]
    pub elapsed: Duration,
    pub message: String,
    /// Raw value of the `success` field; `Some(Value::Null)` means present but null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_field: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_error_snippet: Option<String>,
}

impl ValidationResult {
    pub(crate) fn success(
        elapsed: Duration,
        message: impl Into<String>,
        success_field: Option<Value>,
    ) -> Self {
        Self {
            ok: true,
            outcome: Outcome::Success,
            status_code: Some(200),
            elapsed,
            message: message.into(),
            success_field,
            raw_error_snippet: None,
        }
    }

    pub(crate) fn timeout(elapsed: Duration) -> Self {
        Self {
            ok: false,
            outcome: Outcome::Timeout,
            status_code: None,
            elapsed,
            message: "timeout".to_string(),
            success_field: None,
            raw_error_snippet: None,
        }
    }

    pub(crate) fn network_failure(elapsed: Duration, description: &str) -> Self {
        Self {
            ok: false,
            outcome: Outcome::NetworkFailure,
            status_code: None,
            elapsed,
            message: format!("network error: {description}"),
            success_field: None,
            raw_error_snippet: None,
        }
    }

    pub(crate) fn http_error(status: u16, elapsed: Duration, body: &str) -> Self {
        Self {
            ok: false,
            outcome: Outcome::HttpError,
            status_code: Some(status),
            elapsed,
            message: format!("HTTP error {status}"),
            success_field: None,
            raw_error_snippet: error_snippet(body),
        }
    }

    pub(crate) fn malformed(elapsed: Duration, body: &str) -> Self {
        Self {
            ok: false,
            outcome: Outcome::MalformedResponse,
            status_code: Some(200),
            elapsed,
            message: "200 but invalid/absent JSON object".to_string(),
            success_field: None,
            raw_error_snippet: error_snippet(body),
        }
    }

    pub(crate) fn logical_failure(
        elapsed: Duration,
        message: impl Into<String>,
        success_field: Option<Value>,
        body: &str,
    ) -> Self {
        Self {
            ok: false,
            outcome: Outcome::LogicalFailure,
            status_code: Some(200),
            elapsed,
            message: message.into(),
            success_field,
            raw_error_snippet: error_snippet(body),
        }
    }

    /// Elapsed wall-clock time in seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Short explanation for well-known rejection statuses.
    pub fn status_hint(&self) -> Option<&'static str> {
        match (self.outcome, self.status_code) {
            (Outcome::HttpError, Some(401)) => Some("invalid API key or missing permissions"),
            (Outcome::HttpError, Some(403)) => Some("access denied"),
            (Outcome::HttpError, Some(429)) => Some("too many requests, call limit reached"),
            (Outcome::Timeout, _) => Some("no response within the time limit"),
            _ => None,
        }
    }

    /// Human-readable detail: the message plus a status hint when one exists.
    pub fn detail(&self) -> String {
        match self.status_hint() {
            Some(hint) => format!("{} ({})", self.message, hint),
            None => self.message.clone(),
        }
    }
}

/// First characters of a response body kept for diagnostics; `None` for empty bodies.
pub(crate) fn error_snippet(body: &str) -> Option<String> {
    if body.is_empty() {
        None
    } else {
        Some(body.chars().take(ERROR_SNIPPET_MAX_CHARS).collect())
    }
}

/// Typed view of the fields the probe inspects in a 200 response.
///
/// A field that is present with a JSON `null` is kept as `Some(Value::Null)`
/// so it can be told apart from a missing field.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProbeEnvelope {
    #[serde(default, deserialize_with = "present_value")]
    pub success: Option<Value>,
    #[serde(default, deserialize_with = "present_value")]
    pub result: Option<Value>,
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ProbeEnvelope {
    /// Parse a body that must be a top-level JSON object.
    ///
    /// Returns `None` for invalid JSON and for any non-object value.
    pub(crate) fn parse(body: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(body).ok()? {
            object @ Value::Object(_) => serde_json::from_value(object).ok(),
            _ => None,
        }
    }

    /// True when `success` is exactly the integer 1.
    pub(crate) fn has_success_flag(&self) -> bool {
        self.success.as_ref().and_then(Value::as_i64) == Some(1)
    }
}
