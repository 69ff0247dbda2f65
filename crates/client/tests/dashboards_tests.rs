//! Purpose: Integration tests for dashboard file import.
//! Responsibilities: Verify wrapping with overwrite and folder, skipping missing files, and file error reporting.
//! Non-scope: Does not validate dashboard contents beyond the fields the import touches.
//! Invariants/Assumptions: A missing file never produces a request.

mod common;

use common::*;
use grafana_client::{ClientError, ImportOutcome};
use wiremock::matchers::{body_partial_json, method, path};

fn import_response() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "id": 12,
        "uid": "system-overview",
        "url": "/d/system-overview/system-overview",
        "status": "success",
        "version": 3,
        "slug": "system-overview"
    }))
}

#[tokio::test]
async fn test_import_dashboard_file_posts_wrapped_dashboard() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/dashboards/db"))
        .and(body_partial_json(serde_json::json!({
            "overwrite": true,
            "folderUid": "lucecis",
            "dashboard": { "id": null, "uid": "system-overview", "title": "System Overview" }
        })))
        .respond_with(import_response())
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let outcome = client
        .import_dashboard_file(&fixture_path("system-overview.json"), Some("lucecis"))
        .await
        .unwrap();

    match outcome {
        ImportOutcome::Imported(result) => {
            assert_eq!(result.uid, "system-overview");
            assert_eq!(result.version, Some(3));
        }
        other => panic!("expected import, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_dashboard_file_is_skipped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/dashboards/db"))
        .respond_with(import_response())
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("homeassistant.json");

    let client = test_client(&mock_server);
    let outcome = client
        .import_dashboard_file(&missing, Some("lucecis"))
        .await
        .unwrap();

    assert_eq!(outcome, ImportOutcome::Skipped { path: missing });
}

#[tokio::test]
async fn test_export_wrapper_is_unwrapped_before_import() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/dashboards/db"))
        .and(body_partial_json(serde_json::json!({
            "dashboard": { "uid": "home", "title": "Home Assistant" }
        })))
        .respond_with(import_response())
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = write_json(
        dir.path(),
        "homeassistant.json",
        &serde_json::json!({
            "meta": { "type": "db" },
            "dashboard": { "id": 3, "uid": "home", "title": "Home Assistant" }
        }),
    );

    let client = test_client(&mock_server);
    let outcome = client.import_dashboard_file(&file, None).await.unwrap();

    assert!(!outcome.is_skipped());
}

#[tokio::test]
async fn test_invalid_dashboard_json_is_error() {
    let mock_server = MockServer::start().await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("broken.json");
    std::fs::write(&file, "{ \"title\": ").unwrap();

    let client = test_client(&mock_server);
    let err = client.import_dashboard_file(&file, None).await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidJson { .. }));
}

#[tokio::test]
async fn test_dashboard_rejected_by_grafana() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/dashboards/db"))
        .respond_with(ResponseTemplate::new(412).set_body_json(serde_json::json!({
            "message": "The dashboard has been changed by someone else",
            "status": "version-mismatch"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .import_dashboard_file(&fixture_path("system-overview.json"), None)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(412));
}
