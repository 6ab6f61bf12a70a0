//! Shared test utilities for keyprobe integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic: no `.env`, no host `KEYPROBE_*`.

use assert_cmd::Command;

/// Returns a hermetic `keyprobe` command for integration testing.
#[allow(dead_code)]
pub fn keyprobe_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("keyprobe");

    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("KEYPROBE_BASE_URL")
        .env_remove("KEYPROBE_METHOD")
        .env_remove("KEYPROBE_CONTRACT")
        .env_remove("KEYPROBE_TIMEOUT")
        .env_remove("KEYPROBE_SKIP_VERIFY")
        .env_remove("KEYPROBE_METRICS_BIND")
        .env_remove("KEYPROBE_OTLP_ENDPOINT")
        .env_remove("RUST_LOG");

    cmd
}

/// Hermetic command pointed at a mock server.
#[allow(dead_code)]
pub fn keyprobe_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = keyprobe_cmd();
    cmd.env("KEYPROBE_BASE_URL", base_url);
    cmd
}
