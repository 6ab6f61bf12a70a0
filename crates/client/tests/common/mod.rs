//! Common test utilities for integration tests.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::time::Duration;

#[allow(unused_imports)]
pub use keyprobe_client::{KeyProbeClient, KeyValidator, Outcome, ValidationResult};
#[allow(unused_imports)]
pub use keyprobe_config::ResponseContract;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path every probe request targets.
#[allow(dead_code)]
pub const PROBE_PATH: &str = "/tennis/";

#[allow(dead_code)]
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Build a client pointed at the mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer, contract: ResponseContract) -> KeyProbeClient {
    KeyProbeClient::builder()
        .base_url(server.uri())
        .contract(contract)
        .build()
        .expect("client should build for mock server")
}
