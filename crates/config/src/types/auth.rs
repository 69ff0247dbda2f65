//! Authentication types for Grafana configuration.
//!
//! Responsibilities:
//! - Define authentication strategies (basic auth, API token).
//!
//! Does NOT handle:
//! - Attaching credentials to requests (see client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.

use secrecy::SecretString;

/// Strategy for authenticating with Grafana.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// HTTP basic authentication with a Grafana user.
    Basic {
        username: String,
        password: SecretString,
    },
    /// Service account or API token (bearer authentication).
    ApiToken { token: SecretString },
}

/// Authentication configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    pub strategy: AuthStrategy,
}
