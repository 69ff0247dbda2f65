//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::path::{Path, PathBuf};

#[allow(unused_imports)]
pub use grafana_client::{AuthStrategy, GrafanaClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use secrecy::SecretString;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// `admin:admin`, the credentials of a fresh Grafana.
#[allow(dead_code)]
pub fn admin_auth() -> AuthStrategy {
    AuthStrategy::Basic {
        username: "admin".to_string(),
        password: SecretString::new("admin".to_string().into()),
    }
}

/// A client for the mock server with rate-limit retries disabled.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> GrafanaClient {
    GrafanaClient::builder()
        .base_url(server.uri())
        .auth_strategy(admin_auth())
        .max_retries(0)
        .build()
        .expect("client should build")
}

#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

#[allow(dead_code)]
pub fn load_fixture(name: &str) -> serde_json::Value {
    let content = std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("fixture {name} should exist: {e}"));
    serde_json::from_str(&content).unwrap_or_else(|e| panic!("fixture {name} is not JSON: {e}"))
}

/// Write `value` as `name` inside `dir` and return its path.
#[allow(dead_code)]
pub fn write_json(dir: &Path, name: &str, value: &serde_json::Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}
