//! Folder models.

use grafana_config::FolderSpec;
use serde::{Deserialize, Serialize};

/// A folder as returned by `POST /api/folders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    #[serde(default)]
    pub id: Option<u64>,
    pub uid: String,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Body of `POST /api/folders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewFolder {
    pub uid: String,
    pub title: String,
}

impl From<&FolderSpec> for NewFolder {
    fn from(spec: &FolderSpec) -> Self {
        Self {
            uid: spec.uid.clone(),
            title: spec.title.clone(),
        }
    }
}
