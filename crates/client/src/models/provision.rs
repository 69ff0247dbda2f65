//! Report types for the provisioning workflow.

use serde::{Serialize, Serializer};
use std::path::PathBuf;

use super::alert_rules::AlertRulesImport;
use super::common::{ImportOutcome, UpsertOutcome};
use super::dashboards::DashboardImportResult;
use crate::error::ClientError;

fn serialize_error<S: Serializer>(error: &ClientError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&error.to_string())
}

/// A step that failed without aborting the workflow.
#[derive(Debug, Serialize)]
pub struct StepFailure {
    /// Which step failed (e.g. `datasource:prometheus`).
    pub step: String,
    /// HTTP status Grafana answered with, when there was one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(serialize_with = "serialize_error")]
    pub error: ClientError,
}

impl StepFailure {
    pub fn new(step: impl Into<String>, error: ClientError) -> Self {
        Self {
            step: step.into(),
            status: error.status(),
            error,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasourceReport {
    pub key: String,
    pub name: String,
    pub outcome: UpsertOutcome,
    pub uid: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FolderReport {
    pub uid: String,
    pub title: String,
    pub outcome: UpsertOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub title: String,
    pub path: PathBuf,
    pub outcome: ImportOutcome<DashboardImportResult>,
}

#[derive(Debug, Serialize)]
pub struct AlertRulesReport {
    pub path: PathBuf,
    pub outcome: ImportOutcome<AlertRulesImport>,
}

/// Everything one provisioning run did.
///
/// Only successful steps are listed in the per-resource fields; anything
/// that went wrong is in `failures`.
#[derive(Debug, Default, Serialize)]
pub struct ProvisionReport {
    pub datasources: Vec<DatasourceReport>,
    pub folder: Option<FolderReport>,
    pub dashboards: Vec<DashboardReport>,
    pub alert_rules: Option<AlertRulesReport>,
    pub failures: Vec<StepFailure>,
}

impl ProvisionReport {
    /// True when no step failed, including individual alert rules.
    pub fn is_clean(&self) -> bool {
        let rule_failures = match &self.alert_rules {
            Some(AlertRulesReport {
                outcome: ImportOutcome::Imported(import),
                ..
            }) => import.failed.len(),
            _ => 0,
        };
        self.failures.is_empty() && rule_failures == 0
    }

    pub(crate) fn record_failure(&mut self, step: impl Into<String>, error: ClientError) {
        let failure = StepFailure::new(step, error);
        tracing::warn!(step = %failure.step, error = %failure.error, "Provisioning step failed");
        self.failures.push(failure);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_clean() {
        assert!(ProvisionReport::default().is_clean());
    }

    #[test]
    fn test_failed_alert_rule_makes_report_unclean() {
        let mut report = ProvisionReport::default();
        report.alert_rules = Some(AlertRulesReport {
            path: PathBuf::from("alerts/alert-rules.json"),
            outcome: ImportOutcome::Imported(AlertRulesImport {
                imported: vec![],
                failed: vec![StepFailure::new(
                    "alert-rule:High CPU",
                    ClientError::InvalidRequest("bad".to_string()),
                )],
                substitutions: 0,
            }),
        });
        assert!(!report.is_clean());
    }

    #[test]
    fn test_failure_serializes_error_message() {
        let failure = StepFailure::new(
            "folder:lucecis",
            ClientError::ApiError {
                status: 500,
                url: "http://localhost:9000/api/folders".to_string(),
                message: "database locked".to_string(),
            },
        );
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["step"], "folder:lucecis");
        assert_eq!(json["status"], 500);
        assert!(json["error"].as_str().unwrap().contains("database locked"));
    }

    #[test]
    fn test_failure_without_http_status_omits_status() {
        let failure = StepFailure::new(
            "alert-rules:alerts/alert-rules.json",
            ClientError::InvalidRequest("not an object".to_string()),
        );
        let json = serde_json::to_value(&failure).unwrap();
        assert!(json.get("status").is_none());
    }
}
