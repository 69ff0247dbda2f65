//! Purpose: Integration tests for folder creation.
//! Responsibilities: Verify created and already-existing folders are both successes and other statuses fail.
//! Non-scope: Does not test dashboard placement.
//! Invariants/Assumptions: Grafana reports duplicates with 409 or 412 depending on version.

mod common;

use common::*;
use grafana_client::{ClientError, NewFolder, UpsertOutcome};
use grafana_config::FolderSpec;
use wiremock::matchers::{body_json, method, path};

#[tokio::test]
async fn test_ensure_folder_created() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/folders"))
        .and(body_json(serde_json::json!({ "uid": "lucecis", "title": "Lucecis" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 4,
            "uid": "lucecis",
            "title": "Lucecis",
            "url": "/dashboards/f/lucecis/lucecis"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let outcome = client.ensure_folder(&FolderSpec::default()).await.unwrap();

    assert_eq!(outcome, UpsertOutcome::Created);
}

#[tokio::test]
async fn test_ensure_folder_duplicate_statuses_are_success() {
    for status in [409, 412] {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/folders"))
            .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({
                "message": "a folder with the same name already exists"
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let outcome = client.ensure_folder(&FolderSpec::default()).await.unwrap();

        assert_eq!(outcome, UpsertOutcome::AlreadyExists, "status {status}");
    }
}

#[tokio::test]
async fn test_ensure_folder_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/folders"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "message": "database is locked"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .ensure_folder(&FolderSpec::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("database is locked"));
}

#[tokio::test]
async fn test_create_folder_returns_created_folder() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/folders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 4,
            "uid": "lucecis",
            "title": "Lucecis",
            "url": "/dashboards/f/lucecis/lucecis"
        })))
        .mount(&mock_server)
        .await;

    let folder = endpoints::create_folder(
        &Client::new(),
        &mock_server.uri(),
        &admin_auth(),
        &NewFolder::from(&FolderSpec::default()),
        0,
    )
    .await
    .unwrap()
    .expect("folder should be created");

    assert_eq!(folder.id, Some(4));
    assert_eq!(folder.uid, "lucecis");
    assert_eq!(folder.url.as_deref(), Some("/dashboards/f/lucecis/lucecis"));
}

#[tokio::test]
async fn test_create_folder_existing_returns_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/folders"))
        .respond_with(ResponseTemplate::new(412))
        .mount(&mock_server)
        .await;

    let folder = endpoints::create_folder(
        &Client::new(),
        &mock_server.uri(),
        &admin_auth(),
        &NewFolder::from(&FolderSpec::default()),
        0,
    )
    .await
    .unwrap();

    assert!(folder.is_none());
}

#[tokio::test]
async fn test_ensure_folder_unparseable_body_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/folders"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .ensure_folder(&FolderSpec::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)));
}
