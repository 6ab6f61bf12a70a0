//! Serde helpers shared by the result models.
//!
//! Invariants:
//! - Durations are written as fractional seconds (`f64`).

use serde::Serializer;
use std::time::Duration;

pub fn duration_as_secs<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(duration.as_secs_f64())
}
