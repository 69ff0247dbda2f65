//! Dashboard import models.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/dashboards/db`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardImportRequest {
    pub dashboard: serde_json::Value,
    pub overwrite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DashboardImportRequest {
    /// Wrap a dashboard definition for import, replacing any existing copy.
    ///
    /// Accepts either a bare dashboard model or an export wrapper
    /// (`{"dashboard": {...}, "meta": {...}}`). The numeric `id` is cleared
    /// so Grafana matches existing dashboards by `uid` instead.
    pub fn new(definition: serde_json::Value, folder_uid: Option<String>) -> Self {
        let mut dashboard = match definition {
            serde_json::Value::Object(mut map) if map.contains_key("dashboard") => map
                .remove("dashboard")
                .unwrap_or(serde_json::Value::Object(map)),
            other => other,
        };

        if let Some(obj) = dashboard.as_object_mut() {
            obj.insert("id".to_string(), serde_json::Value::Null);
        }

        Self {
            dashboard,
            overwrite: true,
            folder_uid,
            message: Some("Provisioned by grafana-provision".to_string()),
        }
    }

    /// Dashboard title, if the definition carries one.
    pub fn title(&self) -> Option<&str> {
        self.dashboard.get("title").and_then(|t| t.as_str())
    }
}

/// Response of `POST /api/dashboards/db`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardImportResult {
    #[serde(default)]
    pub id: Option<u64>,
    pub uid: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub version: Option<u64>,
}
