//! Batch runner tests.
//!
//! Covers ordering, counts, progress callbacks, cancellation and the empty-input
//! guard, using both a scripted validator and a mock HTTP server.

mod common;

use common::*;
use keyprobe_client::{BatchError, BatchRunner, NoProgress, ProgressObserver, parse_keys};
use secrecy::SecretString;
use serde_json::json;
use std::sync::Mutex;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};

fn secrets(keys: &[&str]) -> Vec<SecretString> {
    keys.iter()
        .map(|k| SecretString::new(k.to_string().into()))
        .collect()
}

/// Validator that passes keys starting with "good" and records call order.
#[derive(Default)]
struct ScriptedValidator {
    calls: Mutex<Vec<String>>,
}

impl KeyValidator for ScriptedValidator {
    async fn validate(&self, key: &str, timeout: Duration) -> ValidationResult {
        self.calls.lock().unwrap().push(key.to_string());
        tokio::task::yield_now().await;

        if key.starts_with("good") {
            ok_result(timeout)
        } else {
            unauthorized_result(timeout)
        }
    }
}

fn ok_result(elapsed: Duration) -> ValidationResult {
    ValidationResult {
        ok: true,
        outcome: Outcome::Success,
        status_code: Some(200),
        elapsed,
        message: "OK (success=1)".to_string(),
        success_field: Some(json!(1)),
        raw_error_snippet: None,
    }
}

fn unauthorized_result(elapsed: Duration) -> ValidationResult {
    ValidationResult {
        ok: false,
        outcome: Outcome::HttpError,
        status_code: Some(401),
        elapsed,
        message: "HTTP error 401".to_string(),
        success_field: None,
        raw_error_snippet: Some("Unauthorized".to_string()),
    }
}

#[derive(Default)]
struct RecordingObserver {
    progress: Vec<(usize, usize)>,
    started: Vec<(usize, String)>,
    cancel_after: Option<usize>,
}

impl ProgressObserver for RecordingObserver {
    fn on_key_started(&mut self, index: usize, masked_key: &str) {
        self.started.push((index, masked_key.to_string()));
    }

    fn on_progress(&mut self, completed: usize, total: usize) {
        self.progress.push((completed, total));
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_after
            .is_some_and(|limit| self.progress.len() >= limit)
    }
}

#[tokio::test]
async fn test_alternating_keys_keep_order_and_counts() {
    let validator = ScriptedValidator::default();
    let runner = BatchRunner::new(&validator, Duration::from_millis(10));
    let keys = secrets(&["good-key-0001", "bad-key-0002", "good-key-0003", "bad-key-0004"]);

    let report = runner.run(&keys, &mut NoProgress).await.unwrap();

    assert_eq!(report.len(), 4);
    assert_eq!(report.ok_count(), 2);
    assert_eq!(report.fail_count(), 2);
    assert_eq!(report.total_requested, 4);
    assert!(!report.cancelled);
    assert!(!report.all_ok());

    let oks: Vec<bool> = report.entries.iter().map(|e| e.result.ok).collect();
    assert_eq!(oks, vec![true, false, true, false]);
    assert_eq!(report.entries[0].masked_key, "good****001");
    assert_eq!(report.entries[1].masked_key, "bad-****002");

    let calls = validator.calls.lock().unwrap().clone();
    assert_eq!(
        calls,
        vec!["good-key-0001", "bad-key-0002", "good-key-0003", "bad-key-0004"]
    );

    let failures: Vec<&str> = report
        .failures()
        .map(|e| e.masked_key.as_str())
        .collect();
    assert_eq!(failures, vec!["bad-****002", "bad-****004"]);
}

#[tokio::test]
async fn test_progress_reported_after_each_key() {
    let validator = ScriptedValidator::default();
    let runner = BatchRunner::new(&validator, Duration::from_millis(10));
    let mut observer = RecordingObserver::default();

    runner
        .run_text("good-a-key\n\n  bad-b-key  \ngood-c-key\n", &mut observer)
        .await
        .unwrap();

    assert_eq!(observer.progress, vec![(1, 3), (2, 3), (3, 3)]);
    let indices: Vec<usize> = observer.started.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert!(observer.started.iter().all(|(_, m)| m.contains("****")));
}

#[tokio::test]
async fn test_cancellation_returns_partial_report() {
    let validator = ScriptedValidator::default();
    let runner = BatchRunner::new(&validator, Duration::from_millis(10));
    let keys = secrets(&["good-1-key", "good-2-key", "good-3-key", "good-4-key"]);
    let mut observer = RecordingObserver {
        cancel_after: Some(2),
        ..Default::default()
    };

    let report = runner.run(&keys, &mut observer).await.unwrap();

    assert!(report.cancelled);
    assert_eq!(report.len(), 2);
    assert_eq!(report.total_requested, 4);
    assert_eq!(validator.calls.lock().unwrap().len(), 2);
    assert!(!report.all_ok());
}

#[tokio::test]
async fn test_blank_input_is_rejected_without_calls() {
    let validator = ScriptedValidator::default();
    let runner = BatchRunner::new(&validator, Duration::from_millis(10));

    let err = runner.run_text(" \n\t\n", &mut NoProgress).await.unwrap_err();
    assert_eq!(err, BatchError::EmptyInput);

    let err = runner
        .run(&secrets(&["", "   "]), &mut NoProgress)
        .await
        .unwrap_err();
    assert_eq!(err, BatchError::EmptyInput);

    assert!(validator.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_input_makes_no_http_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": 1})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, ResponseContract::SuccessFlag);
    let runner = BatchRunner::new(&client, TEST_TIMEOUT);

    let result = runner.run(&parse_keys("\n\n"), &mut NoProgress).await;
    assert!(matches!(result, Err(BatchError::EmptyInput)));
}

#[tokio::test]
async fn test_batch_against_mock_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PROBE_PATH))
        .and(query_param("APIkey", "valid-key-123456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": 1})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(PROBE_PATH))
        .and(query_param("APIkey", "revoked-key-987654"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ResponseContract::SuccessFlag);
    let runner = BatchRunner::new(&client, TEST_TIMEOUT);

    let report = runner
        .run_text("valid-key-123456\nrevoked-key-987654\n", &mut NoProgress)
        .await
        .unwrap();

    assert_eq!(report.ok_count(), 1);
    assert_eq!(report.fail_count(), 1);
    assert_eq!(report.entries[0].masked_key, "vali****456");
    assert_eq!(report.entries[1].result.status_code, Some(403));
    assert_eq!(
        report.entries[1].result.raw_error_snippet.as_deref(),
        Some("Forbidden")
    );
}

#[tokio::test]
async fn test_report_serializes_without_raw_keys() {
    let validator = ScriptedValidator::default();
    let runner = BatchRunner::new(&validator, Duration::from_millis(10));
    let keys = secrets(&["good-secret-material-xyz"]);

    let report = runner.run(&keys, &mut NoProgress).await.unwrap();
    let json = serde_json::to_string(&report).unwrap();

    assert!(!json.contains("good-secret-material-xyz"));
    assert!(json.contains("good****xyz"));
    assert!(json.contains("\"elapsed_seconds\""));
    assert!(json.contains("\"started_at\""));
}
