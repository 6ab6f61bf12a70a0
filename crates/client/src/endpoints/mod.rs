//! REST API endpoint implementations.

mod probe;

pub use probe::{probe_key, probe_url};
