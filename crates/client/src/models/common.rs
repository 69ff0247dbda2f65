//! Common types shared across Grafana API models.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Error body returned by most Grafana API endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct GrafanaMessage {
    pub message: String,
}

/// Result of an idempotent create call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertOutcome {
    /// Grafana created the resource.
    Created,
    /// The resource was already there; treated as success.
    AlreadyExists,
}

/// Result of importing a local definition file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum ImportOutcome<T> {
    /// The file was read and submitted.
    Imported(T),
    /// The file does not exist; nothing was sent.
    Skipped { path: PathBuf },
}

impl<T> ImportOutcome<T> {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}
