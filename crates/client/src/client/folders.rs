//! Folder API methods for [`GrafanaClient`].

use grafana_config::FolderSpec;
use tracing::info;

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{NewFolder, UpsertOutcome};

impl GrafanaClient {
    /// Create the folder unless it already exists.
    pub async fn ensure_folder(&self, spec: &FolderSpec) -> Result<UpsertOutcome> {
        let created = endpoints::create_folder(
            &self.http,
            &self.base_url,
            &self.auth,
            &NewFolder::from(spec),
            self.max_retries,
        )
        .await?;

        match created {
            Some(folder) => {
                info!(uid = %folder.uid, title = %folder.title, url = ?folder.url, "Folder created");
                Ok(UpsertOutcome::Created)
            }
            None => {
                info!(uid = %spec.uid, title = %spec.title, "Folder already exists");
                Ok(UpsertOutcome::AlreadyExists)
            }
        }
    }
}
