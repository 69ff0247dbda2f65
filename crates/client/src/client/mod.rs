//! Main Grafana API client and provisioning methods.
//!
//! This module provides the primary [`GrafanaClient`] for talking to the
//! Grafana HTTP API.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `health`: Readiness polling
//! - `datasources`: Datasource registration and UID lookup
//! - `folders`: Folder creation
//! - `dashboards`: Dashboard file import
//! - `alert_rules`: Alert rules file import with UID substitution
//! - `provision`: The full provisioning workflow
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Configuration loading (handled by `grafana-config`)
//!
//! # Invariants
//! - Every request except the health check carries the configured credentials.
//! - Steps that touch Grafana are strictly sequential; the client never spawns tasks.

pub mod builder;

mod alert_rules;
mod dashboards;
mod datasources;
mod folders;
mod health;
mod provision;

use serde_json::Value;
use std::path::Path;

use crate::auth::AuthStrategy;
use crate::error::{ClientError, Result};

/// Grafana HTTP API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use grafana_client::{AuthStrategy, GrafanaClient};
/// use secrecy::SecretString;
///
/// let client = GrafanaClient::builder()
///     .base_url("http://localhost:9000".to_string())
///     .auth_strategy(AuthStrategy::Basic {
///         username: "admin".to_string(),
///         password: SecretString::new("admin".to_string().into()),
///     })
///     .build()?;
/// ```
#[derive(Debug)]
pub struct GrafanaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) auth: AuthStrategy,
    pub(crate) max_retries: usize,
}

impl GrafanaClient {
    /// Create a new client builder.
    pub fn builder() -> builder::GrafanaClientBuilder {
        builder::GrafanaClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if the client authenticates with an API token.
    pub fn is_api_token_auth(&self) -> bool {
        self.auth.is_api_token()
    }
}

/// Read a JSON definition file. A missing file yields `None`.
pub(crate) fn read_json_file(path: &Path) -> Result<Option<Value>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ClientError::FileRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| ClientError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn token() -> AuthStrategy {
        AuthStrategy::ApiToken {
            token: SecretString::new("test-token".to_string().into()),
        }
    }

    #[test]
    fn test_client_builder_with_api_token() {
        let client = GrafanaClient::builder()
            .base_url("http://localhost:9000".to_string())
            .auth_strategy(token())
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://localhost:9000");
        assert!(client.is_api_token_auth());
    }

    #[test]
    fn test_client_builder_missing_base_url() {
        let client = GrafanaClient::builder().auth_strategy(token()).build();

        assert!(matches!(client.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_client_builder_missing_auth() {
        let client = GrafanaClient::builder()
            .base_url("http://localhost:9000".to_string())
            .build();

        assert!(matches!(client.unwrap_err(), ClientError::InvalidRequest(_)));
    }

    #[test]
    fn test_read_json_file_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_json_file(&dir.path().join("absent.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_read_json_file_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            read_json_file(&path),
            Err(ClientError::InvalidJson { .. })
        ));
    }

    #[test]
    fn test_client_builder_normalizes_base_url() {
        let client = GrafanaClient::builder()
            .base_url("http://localhost:9000/".to_string())
            .auth_strategy(token())
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://localhost:9000");
    }
}
