//! Error types for the keyprobe client.
//!
//! Validation failures are never errors: they are reported as
//! [`crate::ValidationResult`] values. The errors here cover client
//! construction only.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while building a [`crate::KeyProbeClient`].
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP client construction error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid probe method.
    #[error("Invalid probe method: {0}")]
    InvalidMethod(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_display() {
        let err = ClientError::InvalidUrl("base_url is required".to_string());
        assert_eq!(err.to_string(), "Invalid URL: base_url is required");
    }
}
