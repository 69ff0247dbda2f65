//! Plan file tests for the configuration loader.

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::loader::plan::load_plan_file;
use serial_test::serial;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::{cleared_env, env_lock, env_with};

fn write_plan(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("plan.json");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_plan_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_plan(
        temp_dir.path(),
        r#"{
            "datasources": [
                { "key": "prometheus", "name": "Mimir", "type": "prometheus", "url": "http://mimir/prometheus", "isDefault": true }
            ],
            "dashboards": [ { "path": "boards/node.json", "title": "Node" } ],
            "alertRules": null
        }"#,
    );

    let plan = load_plan_file(&path).unwrap();

    assert_eq!(plan.datasources.len(), 1);
    assert_eq!(plan.datasources[0].name, "Mimir");
    assert_eq!(plan.dashboards[0].path, PathBuf::from("boards/node.json"));
    assert!(plan.alert_rules.is_none());
    // Unspecified sections keep their defaults
    assert_eq!(plan.folder.uid, "lucecis");
}

#[test]
fn test_missing_plan_file_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_plan_file(&temp_dir.path().join("absent.json"));
    assert!(matches!(result, Err(ConfigError::PlanFileRead { .. })));
}

#[test]
fn test_malformed_plan_file_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_plan(temp_dir.path(), "{ not json");
    let result = load_plan_file(&path);
    assert!(matches!(result, Err(ConfigError::PlanFileParse { .. })));
}

#[test]
fn test_duplicate_datasource_keys_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_plan(
        temp_dir.path(),
        r#"{ "datasources": [
            { "key": "prometheus", "name": "A", "type": "prometheus", "url": "http://a" },
            { "key": "Prometheus", "name": "B", "type": "prometheus", "url": "http://b" }
        ] }"#,
    );

    let result = load_plan_file(&path);
    assert!(matches!(result, Err(ConfigError::InvalidPlan(_))));
}

#[test]
#[serial]
fn test_plan_path_from_env_and_url_override() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_plan(
        temp_dir.path(),
        r#"{ "datasources": [
            { "key": "prometheus", "name": "Prometheus", "type": "prometheus", "url": "http://from-plan:9090" }
        ] }"#,
    );
    let path_str = path.to_string_lossy().into_owned();

    temp_env::with_vars(
        env_with(&[
            ("GRAFANA_PLAN_PATH", path_str.as_str()),
            ("PROMETHEUS_URL", "http://from-env:9090"),
        ]),
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.plan.datasources.len(), 1);
            assert_eq!(config.plan.datasources[0].url, "http://from-env:9090");
        },
    );
}

#[test]
#[serial]
fn test_cli_plan_path_wins_over_env() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_plan(temp_dir.path(), r#"{ "folder": { "uid": "cli", "title": "CLI" } }"#);

    temp_env::with_vars(
        env_with(&[("GRAFANA_PLAN_PATH", "/nonexistent/plan.json")]),
        || {
            let config = ConfigLoader::new()
                .with_plan_path(path.clone())
                .from_env()
                .unwrap()
                .build()
                .unwrap();
            assert_eq!(config.plan.folder.uid, "cli");
        },
    );

    temp_env::with_vars(cleared_env(), || {
        let config = ConfigLoader::new()
            .with_plan_path(path.clone())
            .build()
            .unwrap();
        assert_eq!(config.plan.folder.title, "CLI");
    });
}
