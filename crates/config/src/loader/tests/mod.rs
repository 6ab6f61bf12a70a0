//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// All `KEYPROBE_*` variables cleared, for use with `temp_env::with_vars`.
pub fn cleared_env() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("KEYPROBE_BASE_URL", None),
        ("KEYPROBE_METHOD", None),
        ("KEYPROBE_CONTRACT", None),
        ("KEYPROBE_TIMEOUT", None),
        ("KEYPROBE_SKIP_VERIFY", None),
    ]
}
