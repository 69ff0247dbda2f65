//! Datasource models.

use grafana_config::DatasourceSpec;
use serde::{Deserialize, Serialize};

use super::common::UpsertOutcome;

/// A datasource as returned by `GET /api/datasources/name/{name}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datasource {
    pub id: u64,
    pub uid: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Body of `POST /api/datasources`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDatasource {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub access: String,
    pub is_default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_data: Option<serde_json::Value>,
}

impl From<&DatasourceSpec> for NewDatasource {
    fn from(spec: &DatasourceSpec) -> Self {
        Self {
            name: spec.name.clone(),
            kind: spec.kind.clone(),
            url: spec.url.clone(),
            access: spec.access.clone(),
            is_default: spec.is_default,
            json_data: spec.json_data.clone(),
        }
    }
}

/// A datasource after registration and UID lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredDatasource {
    pub outcome: UpsertOutcome,
    pub datasource: Datasource,
}
