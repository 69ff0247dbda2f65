//! Alert rule provisioning models.

use serde::{Deserialize, Serialize};

use super::provision::StepFailure;

/// Response of `POST /api/v1/provisioning/alert-rules`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionedAlertRule {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "folderUID")]
    pub folder_uid: Option<String>,
    #[serde(default)]
    pub rule_group: Option<String>,
}

/// Outcome of importing one alert rules file.
///
/// Rules are submitted one by one; a rejected rule does not stop the rest.
#[derive(Debug, Default, Serialize)]
pub struct AlertRulesImport {
    pub imported: Vec<ProvisionedAlertRule>,
    pub failed: Vec<StepFailure>,
    /// Number of datasource placeholders rewritten to real UIDs.
    pub substitutions: usize,
}
