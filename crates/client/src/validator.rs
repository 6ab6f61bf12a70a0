//! The seam between the batch runner and whatever performs a key check.

use std::future::Future;
use std::time::Duration;

use crate::models::ValidationResult;

/// Checks one key and reports a verdict.
///
/// Implementations never fail: every problem is reported through the
/// returned [`ValidationResult`].
pub trait KeyValidator {
    fn validate(&self, key: &str, timeout: Duration)
    -> impl Future<Output = ValidationResult> + Send;
}
