//! Provisioning plan types.
//!
//! Responsibilities:
//! - Describe what gets provisioned: datasources, folder, dashboards, alert rules.
//! - Provide the built-in default plan.
//! - (De)serialize plans from JSON plan files.
//!
//! Does NOT handle:
//! - Reading plan files from disk (see `loader::plan`).
//! - Talking to Grafana (see client crate).
//!
//! Invariants:
//! - Missing fields in a plan file fall back to the built-in defaults.
//! - Datasource `key`s are the logical names referenced by alert rule placeholders.
//! - Durations are serialized as whole seconds.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_ALERT_RULES_PATH, DEFAULT_FOLDER_TITLE, DEFAULT_FOLDER_UID, DEFAULT_LOKI_URL,
    DEFAULT_PROMETHEUS_URL, DEFAULT_SETTLE_DELAY_SECS,
};

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

fn default_access() -> String {
    "proxy".to_string()
}

/// A datasource to register in Grafana.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasourceSpec {
    /// Logical name used by alert rule placeholders (e.g. `prometheus`).
    pub key: String,
    /// Display name in Grafana.
    pub name: String,
    /// Grafana plugin type (e.g. `prometheus`, `loki`).
    #[serde(rename = "type")]
    pub kind: String,
    /// URL Grafana uses to reach the backend.
    pub url: String,
    /// Access mode; Grafana only accepts `proxy` for server-side queries.
    #[serde(default = "default_access")]
    pub access: String,
    /// Whether this becomes the organization's default datasource.
    #[serde(default)]
    pub is_default: bool,
    /// Plugin-specific settings passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_data: Option<serde_json::Value>,
}

impl DatasourceSpec {
    /// The stock Prometheus datasource, marked as default.
    pub fn prometheus(url: impl Into<String>) -> Self {
        Self {
            key: "prometheus".to_string(),
            name: "Prometheus".to_string(),
            kind: "prometheus".to_string(),
            url: url.into(),
            access: default_access(),
            is_default: true,
            json_data: None,
        }
    }

    /// The stock Loki datasource.
    pub fn loki(url: impl Into<String>) -> Self {
        Self {
            key: "loki".to_string(),
            name: "Loki".to_string(),
            kind: "loki".to_string(),
            url: url.into(),
            access: default_access(),
            is_default: false,
            json_data: None,
        }
    }
}

/// The folder that holds provisioned dashboards and alert rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderSpec {
    pub uid: String,
    pub title: String,
}

impl Default for FolderSpec {
    fn default() -> Self {
        Self {
            uid: DEFAULT_FOLDER_UID.to_string(),
            title: DEFAULT_FOLDER_TITLE.to_string(),
        }
    }
}

/// A dashboard definition file to import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSpec {
    /// Path to the dashboard JSON, relative to the working directory.
    pub path: PathBuf,
    /// Human readable name used in logs and reports.
    pub title: String,
}

impl DashboardSpec {
    pub fn new(path: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
        }
    }
}

/// An alert rules file to import through the provisioning API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRulesSpec {
    pub path: PathBuf,
}

impl Default for AlertRulesSpec {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_ALERT_RULES_PATH),
        }
    }
}

/// Everything the provisioning workflow creates, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProvisionPlan {
    pub datasources: Vec<DatasourceSpec>,
    pub folder: FolderSpec,
    pub dashboards: Vec<DashboardSpec>,
    /// `None` disables alert rule import.
    pub alert_rules: Option<AlertRulesSpec>,
    /// Pause after datasource registration.
    #[serde(with = "duration_seconds")]
    pub settle_delay: Duration,
}

impl Default for ProvisionPlan {
    fn default() -> Self {
        Self {
            datasources: vec![
                DatasourceSpec::prometheus(DEFAULT_PROMETHEUS_URL),
                DatasourceSpec::loki(DEFAULT_LOKI_URL),
            ],
            folder: FolderSpec::default(),
            dashboards: vec![
                DashboardSpec::new("dashboards/system-overview.json", "System Overview"),
                DashboardSpec::new("dashboards/lucecis-app.json", "Lucecis App Metrics"),
                DashboardSpec::new("dashboards/homeassistant.json", "Home Assistant"),
            ],
            alert_rules: Some(AlertRulesSpec::default()),
            settle_delay: Duration::from_secs(DEFAULT_SETTLE_DELAY_SECS),
        }
    }
}

impl ProvisionPlan {
    /// Find a datasource by its logical key.
    pub fn datasource_mut(&mut self, key: &str) -> Option<&mut DatasourceSpec> {
        self.datasources.iter_mut().find(|ds| ds.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_registers_prometheus_and_loki() {
        let plan = ProvisionPlan::default();
        let keys: Vec<&str> = plan.datasources.iter().map(|ds| ds.key.as_str()).collect();
        assert_eq!(keys, ["prometheus", "loki"]);
        assert!(plan.datasources[0].is_default);
        assert!(!plan.datasources[1].is_default);
        assert_eq!(plan.dashboards.len(), 3);
        assert_eq!(plan.settle_delay, Duration::from_secs(2));
    }

    #[test]
    fn test_partial_plan_falls_back_to_defaults() {
        let plan: ProvisionPlan = serde_json::from_str(
            r#"{ "folder": { "uid": "ops", "title": "Operations" }, "settleDelay": 0 }"#,
        )
        .unwrap();

        assert_eq!(plan.folder.uid, "ops");
        assert_eq!(plan.settle_delay, Duration::ZERO);
        assert_eq!(plan.datasources, ProvisionPlan::default().datasources);
        assert!(plan.alert_rules.is_some());
    }

    #[test]
    fn test_datasource_spec_uses_grafana_field_names() {
        let spec: DatasourceSpec = serde_json::from_str(
            r#"{
                "key": "tempo",
                "name": "Tempo",
                "type": "tempo",
                "url": "http://tempo:3200",
                "jsonData": { "httpMethod": "GET" }
            }"#,
        )
        .unwrap();

        assert_eq!(spec.kind, "tempo");
        assert_eq!(spec.access, "proxy");
        assert!(!spec.is_default);
        assert_eq!(spec.json_data.unwrap()["httpMethod"], "GET");
    }

    #[test]
    fn test_null_alert_rules_disables_import() {
        let plan: ProvisionPlan = serde_json::from_str(r#"{ "alertRules": null }"#).unwrap();
        assert!(plan.alert_rules.is_none());
    }
}
