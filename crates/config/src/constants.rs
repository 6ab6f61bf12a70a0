//! Centralized constants for the keyprobe workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Endpoint Defaults
// =============================================================================

/// Default base URL of the api-tennis.com service.
pub const DEFAULT_BASE_URL: &str = "https://api-tennis.com";

/// Path of the tennis API below the base URL.
pub const TENNIS_API_PATH: &str = "/tennis/";

/// Default query method; `get_countries` is small and fast to serve.
pub const DEFAULT_PROBE_METHOD: &str = "get_countries";

/// Query parameter carrying the method name.
pub const METHOD_QUERY_PARAM: &str = "method";

/// Query parameter carrying the API key.
pub const API_KEY_QUERY_PARAM: &str = "APIkey";

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Timeout Defaults and Bounds
// =============================================================================

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: f64 = 10.0;

/// Minimum accepted per-request timeout in seconds.
pub const MIN_TIMEOUT_SECS: f64 = 1.0;

/// Maximum accepted per-request timeout in seconds.
pub const MAX_TIMEOUT_SECS: f64 = 60.0;

// =============================================================================
// Result Rendering
// =============================================================================

/// Maximum number of characters kept from a response body for diagnostics.
pub const ERROR_SNIPPET_MAX_CHARS: usize = 300;

/// Number of leading key characters left visible by the masker.
pub const MASK_VISIBLE_START: usize = 4;

/// Number of trailing key characters left visible by the masker.
pub const MASK_VISIBLE_END: usize = 3;

/// Suggested file name for CSV exports.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "api_keys_api_tennis_results.csv";
