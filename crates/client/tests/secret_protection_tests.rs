//! Secret protection tests.
//!
//! Verifies that raw keys do not leak through Debug output, reports,
//! serialized results or transport error messages.
//!
//! What this module does NOT handle:
//! - Log output capture (keys are only ever passed to tracing in masked form)

mod common;

use common::*;
use keyprobe_client::{BatchRunner, NoProgress, parse_keys};
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::method;

const SECRET_KEY: &str = "f3a9c1e7b2d84a6f9e0c5b1d7a3e8f2c";

#[test]
fn test_parsed_keys_redacted_in_debug_output() {
    let keys = parse_keys(&format!("{SECRET_KEY}\n"));
    let debug_output = format!("{:?}", keys);

    assert!(
        !debug_output.contains(SECRET_KEY),
        "Debug output should not contain the key. Output: {}",
        debug_output
    );
}

#[test]
fn test_secret_string_debug_is_redacted() {
    let secret = SecretString::new(SECRET_KEY.to_string().into());
    assert!(!format!("{:?}", secret).contains(SECRET_KEY));
}

#[tokio::test]
async fn test_report_never_contains_raw_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": 0, "error": "bad key"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, ResponseContract::SuccessFlag);
    let runner = BatchRunner::new(&client, TEST_TIMEOUT);
    let report = runner
        .run_text(SECRET_KEY, &mut NoProgress)
        .await
        .unwrap();

    let debug_output = format!("{:?}", report);
    let json_output = serde_json::to_string(&report).unwrap();

    assert!(!debug_output.contains(SECRET_KEY));
    assert!(!json_output.contains(SECRET_KEY));
    assert_eq!(report.entries[0].masked_key, "f3a9****f2c");
}

#[tokio::test]
async fn test_unresolvable_host_error_hides_key() {
    let client = KeyProbeClient::builder()
        .base_url("http://keyprobe-nonexistent.invalid".to_string())
        .build()
        .unwrap();

    let result = client.validate(SECRET_KEY, TEST_TIMEOUT).await;

    assert!(!result.ok);
    assert!(result.status_code.is_none());
    assert!(!result.message.contains(SECRET_KEY));
    assert!(!result.detail().contains(SECRET_KEY));
    assert!(!format!("{:?}", result).contains(SECRET_KEY));
}
