//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs).
//!
//! Invariants:
//! - A readiness failure always exits with 1.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use grafana_client::ClientError;
use grafana_config::ConfigError;

/// Structured exit codes for grafana-provision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed, possibly with non-fatal step failures.
    Success = 0,

    /// General error, including Grafana never becoming ready.
    GeneralError = 1,

    /// Grafana rejected the credentials (HTTP 401/403).
    AuthenticationFailed = 2,

    /// Network, timeout, DNS or TLS failure.
    ConnectionError = 3,

    /// A resource Grafana was asked about does not exist.
    NotFound = 4,

    /// Invalid configuration, plan or definition file.
    ValidationError = 5,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
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
            ClientError::NotReady { .. } => ExitCode::GeneralError,

            _ if err.is_auth_error() => ExitCode::AuthenticationFailed,
            ClientError::ApiError { .. } => match err.status() {
                Some(404) => ExitCode::NotFound,
                Some(400 | 422) => ExitCode::ValidationError,
                _ => ExitCode::GeneralError,
            },

            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }
            ClientError::HttpError(_) => ExitCode::GeneralError,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::MaxRetriesExceeded(_) => ExitCode::ConnectionError,

            ClientError::InvalidRequest(_)
            | ClientError::InvalidResponse(_)
            | ClientError::InvalidJson { .. } => ExitCode::ValidationError,
            ClientError::FileRead { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns `ExitCode::GeneralError` if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ValidationError;
            }
        }

        ExitCode::GeneralError
    }
}
