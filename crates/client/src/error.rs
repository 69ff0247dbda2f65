//! Error types for the Grafana client.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Grafana client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection refused, DNS, timeout, TLS).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from Grafana.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Grafana never reported healthy.
    #[error("Grafana did not become ready after {attempts} attempts{}", .last_error.as_ref().map(|e| format!(" (last error: {e})")).unwrap_or_default())]
    NotReady {
        attempts: u32,
        last_error: Option<String>,
    },

    /// Invalid response format from Grafana.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// A local definition file could not be used as a request payload.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A local definition file could not be read.
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A local definition file is not valid JSON.
    #[error("Invalid JSON in {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Maximum retries exceeded.
    #[error("Maximum retries exceeded ({0} attempts)")]
    MaxRetriesExceeded(usize),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if an HTTP status code is retried by the request helper.
    ///
    /// Only 429 (Too Many Requests) is retried. Readiness has its own poll.
    pub fn is_retryable_status(status: u16) -> bool {
        status == 429
    }

    /// Check if this error indicates an authentication or authorization failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::ApiError { status: 401 | 403, .. })
    }

    /// HTTP status of an API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            url: "http://localhost:9000/api/datasources".to_string(),
            message: "boom".to_string(),
        }
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(api_error(401).is_auth_error());
        assert!(api_error(403).is_auth_error());
        assert!(!api_error(404).is_auth_error());
    }

    #[test]
    fn test_is_retryable_status() {
        assert!(ClientError::is_retryable_status(429));
        assert!(!ClientError::is_retryable_status(200));
        assert!(!ClientError::is_retryable_status(409));
        assert!(!ClientError::is_retryable_status(500));
        assert!(!ClientError::is_retryable_status(503));
    }

    #[test]
    fn test_not_ready_message_includes_last_error() {
        let err = ClientError::NotReady {
            attempts: 30,
            last_error: Some("connection refused".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Grafana did not become ready after 30 attempts (last error: connection refused)"
        );

        let err = ClientError::NotReady {
            attempts: 2,
            last_error: None,
        };
        assert_eq!(err.to_string(), "Grafana did not become ready after 2 attempts");
    }
}
