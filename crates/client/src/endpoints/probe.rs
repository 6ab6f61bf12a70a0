//! Key probe endpoint.
//!
//! Responsibilities:
//! - Send one `GET <base>/tennis/?method=<m>&APIkey=<key>` request.
//! - Classify the response into a [`ValidationResult`].
//!
//! Does NOT handle:
//! - Retries (a probe is exactly one request).
//! - Batch ordering or progress (see [`crate::batch`]).
//!
//! Invariants:
//! - Every branch records elapsed wall-clock time and returns a result; nothing escapes.
//! - Transport error descriptions never include the request URL or the raw key.
//! - Only the masked key is logged.

use keyprobe_config::ResponseContract;
use keyprobe_config::constants::{API_KEY_QUERY_PARAM, METHOD_QUERY_PARAM, TENNIS_API_PATH};
use reqwest::{Client, StatusCode};
use std::error::Error as _;
use std::time::{Duration, Instant};
use tracing::{Instrument, debug, debug_span};

use crate::mask::mask_key;
use crate::models::{ProbeEnvelope, ValidationResult};
use crate::tracing::inject_trace_context;

/// Build the probe URL (without query string) for a normalized base URL.
pub fn probe_url(base_url: &str) -> String {
    format!("{}{}", base_url, TENNIS_API_PATH)
}

/// Validate a single key with one GET request.
pub async fn probe_key(
    client: &Client,
    base_url: &str,
    method: &str,
    contract: ResponseContract,
    key: &str,
    timeout: Duration,
) -> ValidationResult {
    let key = key.trim();
    let masked = mask_key(key);
    let span = debug_span!("probe_key", key = %masked, method = method);

    async move {
        let builder = client
            .get(probe_url(base_url))
            .query(&[(METHOD_QUERY_PARAM, method), (API_KEY_QUERY_PARAM, key)])
            .timeout(timeout);
        let builder = inject_trace_context(builder);

        let started = Instant::now();
        let result = match builder.send().await {
            Ok(response) => {
                let status = response.status();
                match response.text().await {
                    Ok(body) => classify(status, &body, contract, started.elapsed()),
                    Err(e) => transport_failure(e, key, started.elapsed()),
                }
            }
            Err(e) => transport_failure(e, key, started.elapsed()),
        };

        debug!(
            outcome = %result.outcome,
            status = ?result.status_code,
            elapsed_ms = result.elapsed.as_millis() as u64,
            "Probe finished"
        );
        result
    }
    .instrument(span)
    .await
}

/// Map an HTTP status and body to a verdict.
pub(crate) fn classify(
    status: StatusCode,
    body: &str,
    contract: ResponseContract,
    elapsed: Duration,
) -> ValidationResult {
    if status != StatusCode::OK {
        return ValidationResult::http_error(status.as_u16(), elapsed, body);
    }

    let Some(envelope) = ProbeEnvelope::parse(body) else {
        return ValidationResult::malformed(elapsed, body);
    };

    match contract {
        ResponseContract::SuccessFlag => {
            if envelope.has_success_flag() {
                ValidationResult::success(elapsed, "OK (success=1)", envelope.success)
            } else {
                let message = match &envelope.success {
                    Some(value) => format!("200 but success={value}"),
                    None => "200 but no 'success' field in response".to_string(),
                };
                ValidationResult::logical_failure(elapsed, message, envelope.success, body)
            }
        }
        ResponseContract::ResultKey => {
            if envelope.result.is_some() {
                ValidationResult::success(
                    elapsed,
                    "OK (200 with 'result' in response)",
                    envelope.success,
                )
            } else {
                ValidationResult::logical_failure(
                    elapsed,
                    "200 but no 'result' field in response",
                    envelope.success,
                    body,
                )
            }
        }
    }
}

fn transport_failure(err: reqwest::Error, key: &str, elapsed: Duration) -> ValidationResult {
    if err.is_timeout() {
        return ValidationResult::timeout(elapsed);
    }
    ValidationResult::network_failure(elapsed, &describe_transport_error(err, key))
}

/// Render a transport error and its causes without the URL or the raw key.
pub(crate) fn describe_transport_error(err: reqwest::Error, key: &str) -> String {
    let err = err.without_url();
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !description.contains(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }

    if key.is_empty() {
        description
    } else {
        description.replace(key, &mask_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_probe_url() {
        assert_eq!(
            probe_url("https://api-tennis.com"),
            "https://api-tennis.com/tennis/"
        );
    }

    #[test]
    fn test_success_flag_one_passes() {
        let result = classify(
            StatusCode::OK,
            r#"{"success": 1, "result": []}"#,
            ResponseContract::SuccessFlag,
            ms(120),
        );
        assert!(result.ok);
        assert_eq!(result.message, "OK (success=1)");
        assert_eq!(result.success_field, Some(json!(1)));
        assert_eq!(result.status_code, Some(200));
        assert!(result.raw_error_snippet.is_none());
    }

    #[test]
    fn test_success_flag_zero_fails_with_snippet() {
        let body = r#"{"success": 0, "error": "1"}"#;
        let result = classify(StatusCode::OK, body, ResponseContract::SuccessFlag, ms(5));
        assert!(!result.ok);
        assert_eq!(result.outcome, crate::Outcome::LogicalFailure);
        assert_eq!(result.message, "200 but success=0");
        assert_eq!(result.success_field, Some(json!(0)));
        assert_eq!(result.raw_error_snippet.as_deref(), Some(body));
    }

    #[test]
    fn test_missing_success_field() {
        let result = classify(
            StatusCode::OK,
            r#"{"result": []}"#,
            ResponseContract::SuccessFlag,
            ms(5),
        );
        assert!(!result.ok);
        assert!(result.success_field.is_none());
        assert_eq!(result.message, "200 but no 'success' field in response");
    }

    #[test]
    fn test_string_success_is_not_one() {
        let result = classify(
            StatusCode::OK,
            r#"{"success": "1"}"#,
            ResponseContract::SuccessFlag,
            ms(5),
        );
        assert!(!result.ok);
        assert_eq!(result.message, "200 but success=\"1\"");
    }

    #[test]
    fn test_non_object_bodies_are_malformed() {
        for body in ["[]", "[{\"success\": 1}]", "not json", ""] {
            let result = classify(StatusCode::OK, body, ResponseContract::SuccessFlag, ms(5));
            assert_eq!(result.outcome, crate::Outcome::MalformedResponse, "{body}");
            assert_eq!(result.message, "200 but invalid/absent JSON object");
        }
    }

    #[test]
    fn test_result_contract() {
        let ok = classify(
            StatusCode::OK,
            r#"{"result": null}"#,
            ResponseContract::ResultKey,
            ms(5),
        );
        assert!(ok.ok);
        assert_eq!(ok.message, "OK (200 with 'result' in response)");

        let missing = classify(
            StatusCode::OK,
            r#"{"success": 1}"#,
            ResponseContract::ResultKey,
            ms(5),
        );
        assert!(!missing.ok);
        assert_eq!(missing.message, "200 but no 'result' field in response");
        assert_eq!(missing.success_field, Some(json!(1)));
    }

    #[test]
    fn test_non_200_skips_json_inspection() {
        let result = classify(
            StatusCode::CREATED,
            r#"{"success": 1}"#,
            ResponseContract::SuccessFlag,
            ms(5),
        );
        assert!(!result.ok);
        assert_eq!(result.status_code, Some(201));
        assert_eq!(result.message, "HTTP error 201");
        assert!(result.success_field.is_none());
    }

    #[test]
    fn test_empty_error_body_has_no_snippet() {
        let result = classify(
            StatusCode::FORBIDDEN,
            "",
            ResponseContract::SuccessFlag,
            ms(5),
        );
        assert!(result.raw_error_snippet.is_none());
        assert_eq!(result.status_code, Some(403));
    }
}
