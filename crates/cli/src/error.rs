//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish outcomes.
//! - Map library errors found in an `anyhow` chain to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs).
//!
//! Invariants:
//! - An empty key list (2) is distinct from keys that were checked and failed (3).
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use keyprobe_client::{BatchError, ClientError};
use keyprobe_config::ConfigError;

use crate::cancellation::SIGINT_EXIT_CODE;

/// Structured exit codes for keyprobe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Every submitted key was checked and works.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// No keys were supplied after trimming blank lines.
    EmptyInput = 2,

    /// At least one key was checked and failed.
    KeysFailed = 3,

    /// Configuration (flags, environment, `.env`) is invalid.
    InvalidConfig = 4,

    /// Interrupted by SIGINT/Ctrl+C.
    Interrupted = SIGINT_EXIT_CODE,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::InvalidUrl(_) | ClientError::InvalidMethod(_) => ExitCode::InvalidConfig,
            ClientError::HttpError(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&BatchError> for ExitCode {
    fn from(err: &BatchError) -> Self {
        match err {
            BatchError::EmptyInput => ExitCode::EmptyInput,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<BatchError>() {
                return ExitCode::from(err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::InvalidConfig;
            }
            if let Some(err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(err);
            }
        }

        ExitCode::GeneralError
    }
}
