//! Shared test utilities for grafana-provision integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount the Grafana API mocks most tests need.
//!
//! Invariants / Assumptions:
//! - Host `GRAFANA_*` variables never leak into a test run.
//! - Readiness polling is fast (2 attempts, no delay) unless a test overrides it.

use assert_cmd::Command;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Returns a hermetic `grafana-provision` command for integration testing.
pub fn provision_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("grafana-provision");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    for var in [
        "GRAFANA_URL",
        "GRAFANA_USER",
        "GRAFANA_PASSWORD",
        "GRAFANA_API_TOKEN",
        "GRAFANA_TIMEOUT",
        "GRAFANA_MAX_RETRIES",
        "GRAFANA_SKIP_VERIFY",
        "GRAFANA_PLAN_PATH",
        "GRAFANA_OTLP_ENDPOINT",
        "PROMETHEUS_URL",
        "LOKI_URL",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }

    cmd.env("GRAFANA_READY_ATTEMPTS", "2");
    cmd.env("GRAFANA_READY_DELAY", "0");
    cmd.env("GRAFANA_MAX_RETRIES", "0");

    cmd
}

/// Returns a hermetic command pointed at `base_url`.
#[allow(dead_code)]
pub fn provision_cmd_with_url(base_url: &str) -> Command {
    let mut cmd = provision_cmd();
    cmd.env("GRAFANA_URL", base_url);
    cmd
}

/// Mount a healthy Grafana that accepts every provisioning request.
#[allow(dead_code)]
pub async fn mount_healthy_grafana(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "database": "ok",
            "version": "11.2.0"
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/datasources"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;

    for (name, uid) in [("Prometheus", "prom-uid"), ("Loki", "loki-uid")] {
        Mock::given(method("GET"))
            .and(path(format!("/api/datasources/name/{name}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 1,
                "uid": uid,
                "name": name,
                "type": name.to_lowercase()
            })))
            .mount(server)
            .await;
    }

    Mock::given(method("POST"))
        .and(path("/api/folders"))
        .respond_with(ResponseTemplate::new(409))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/dashboards/db"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "uid": "system-overview",
            "status": "success"
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path_regex("^/api/v1/provisioning/alert-rules$"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "uid": "high-cpu",
            "title": "High CPU Usage"
        })))
        .mount(server)
        .await;
}
