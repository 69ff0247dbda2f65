//! Alert rule import methods for [`GrafanaClient`].
//!
//! # What this module handles:
//! - Reading alert rule files (a single rule, an array of rules, or a rule group)
//! - Replacing datasource placeholders with real UIDs
//! - Filling in the folder and group every provisioned rule needs
//! - Submitting rules one at a time
//!
//! # What this module does NOT handle:
//! - Placeholder matching rules (in [`crate::DatasourceUids`])
//!
//! # Invariants
//! - A missing file is skipped with a warning and never sends a request.
//! - One rejected rule never stops the remaining rules.

use serde_json::{Map, Value};
use std::path::Path;
use tracing::{info, warn};

use crate::client::GrafanaClient;
use crate::datasource_uids::DatasourceUids;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{AlertRulesImport, ImportOutcome, ProvisionedAlertRule, StepFailure};

const DEFAULT_RULE_GROUP: &str = "default";
const DEFAULT_ORG_ID: u64 = 1;

impl GrafanaClient {
    /// Create one alert rule through the provisioning API.
    pub async fn create_alert_rule(&self, rule: &Value) -> Result<ProvisionedAlertRule> {
        endpoints::create_alert_rule(
            &self.http,
            &self.base_url,
            &self.auth,
            rule,
            self.max_retries,
        )
        .await
    }

    /// Import every rule in an alert rules file.
    ///
    /// Placeholders are resolved against `uids`, which must already hold the
    /// UIDs of the registered datasources. Rules without a folder are placed
    /// in `folder_uid`.
    ///
    /// # Errors
    ///
    /// Only file level problems (unreadable file, invalid JSON, no rules) are
    /// returned as errors. Per-rule failures land in [`AlertRulesImport::failed`].
    pub async fn import_alert_rules_file(
        &self,
        path: &Path,
        uids: &DatasourceUids,
        folder_uid: &str,
    ) -> Result<ImportOutcome<AlertRulesImport>> {
        let Some(mut document) = crate::client::read_json_file(path)? else {
            warn!(path = %path.display(), "Alert rules file not found, skipping");
            return Ok(ImportOutcome::Skipped {
                path: path.to_path_buf(),
            });
        };

        let substitutions = uids.substitute(&mut document);
        info!(
            path = %path.display(),
            substitutions,
            datasources = uids.len(),
            "Datasource placeholders replaced"
        );

        let rules = split_rules(document, folder_uid)?;
        let mut import = AlertRulesImport {
            substitutions,
            ..AlertRulesImport::default()
        };

        for rule in rules {
            let title = rule_title(&rule);
            match self.create_alert_rule(&rule).await {
                Ok(created) => {
                    info!(title = %title, uid = %created.uid, "Alert rule imported");
                    import.imported.push(created);
                }
                Err(e) => {
                    warn!(title = %title, error = %e, "Alert rule import failed");
                    import
                        .failed
                        .push(StepFailure::new(format!("alert-rule:{}", title), e));
                }
            }
        }

        Ok(ImportOutcome::Imported(import))
    }
}

/// Turn a rules document into individual rule payloads.
///
/// Accepted shapes:
/// - `[rule, ...]`
/// - `{"name": "group", "folderUid": "...", "rules": [rule, ...]}`
/// - `rule`
pub(crate) fn split_rules(document: Value, folder_uid: &str) -> Result<Vec<Value>> {
    let (rules, group, group_folder) = match document {
        Value::Array(rules) => (rules, None, None),
        Value::Object(mut map) if map.get("rules").is_some_and(Value::is_array) => {
            let group = string_field(&map, &["name", "title", "ruleGroup"]);
            let group_folder = string_field(&map, &["folderUid", "folderUID", "folder"]);
            let rules = match map.remove("rules") {
                Some(Value::Array(rules)) => rules,
                _ => Vec::new(),
            };
            (rules, group, group_folder)
        }
        rule @ Value::Object(_) => (vec![rule], None, None),
        _ => {
            return Err(ClientError::InvalidRequest(
                "alert rules file must contain a rule, an array of rules or a rule group"
                    .to_string(),
            ));
        }
    };

    let folder_uid = group_folder.unwrap_or_else(|| folder_uid.to_string());
    let group = group.unwrap_or_else(|| DEFAULT_RULE_GROUP.to_string());

    rules
        .into_iter()
        .enumerate()
        .map(|(index, rule)| match rule {
            Value::Object(mut map) => {
                map.entry("folderUID")
                    .or_insert_with(|| Value::String(folder_uid.clone()));
                map.entry("ruleGroup")
                    .or_insert_with(|| Value::String(group.clone()));
                map.entry("orgID").or_insert_with(|| Value::from(DEFAULT_ORG_ID));
                Ok(Value::Object(map))
            }
            _ => Err(ClientError::InvalidRequest(format!(
                "alert rule #{} is not a JSON object",
                index + 1
            ))),
        })
        .collect()
}

fn string_field(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| map.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

fn rule_title(rule: &Value) -> String {
    rule.get("title")
        .and_then(Value::as_str)
        .unwrap_or("untitled")
        .to_string()
}
