//! Dashboard import methods for [`GrafanaClient`].
//!
//! # What this module handles:
//! - Reading dashboard definition files
//! - Importing them with overwrite into a folder
//!
//! # Invariants
//! - A missing file is skipped with a warning and never sends a request.

use std::path::Path;
use tracing::{info, warn};

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{DashboardImportRequest, DashboardImportResult, ImportOutcome};

impl GrafanaClient {
    /// Create or overwrite a dashboard.
    pub async fn import_dashboard(
        &self,
        request: &DashboardImportRequest,
    ) -> Result<DashboardImportResult> {
        endpoints::import_dashboard(
            &self.http,
            &self.base_url,
            &self.auth,
            request,
            self.max_retries,
        )
        .await
    }

    /// Import a dashboard definition file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError::FileRead`] or
    /// [`crate::ClientError::InvalidJson`] for unusable files, and API errors
    /// from the import itself.
    pub async fn import_dashboard_file(
        &self,
        path: &Path,
        folder_uid: Option<&str>,
    ) -> Result<ImportOutcome<DashboardImportResult>> {
        let Some(definition) = crate::client::read_json_file(path)? else {
            warn!(path = %path.display(), "Dashboard file not found, skipping");
            return Ok(ImportOutcome::Skipped {
                path: path.to_path_buf(),
            });
        };

        let request = DashboardImportRequest::new(definition, folder_uid.map(str::to_string));
        let result = self.import_dashboard(&request).await?;

        info!(
            title = request.title().unwrap_or("untitled"),
            uid = %result.uid,
            "Dashboard imported"
        );

        Ok(ImportOutcome::Imported(result))
    }
}
