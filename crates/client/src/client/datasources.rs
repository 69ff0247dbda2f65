//! Datasource API methods for [`GrafanaClient`].
//!
//! # What this module handles:
//! - Registering a datasource idempotently
//! - Looking up the UID Grafana assigned to it
//!
//! # What this module does NOT handle:
//! - Low-level datasource HTTP calls (in [`crate::endpoints`])

use grafana_config::DatasourceSpec;
use tracing::info;

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Datasource, NewDatasource, RegisteredDatasource, UpsertOutcome};

impl GrafanaClient {
    /// Create a datasource; an existing one with the same name is left as is.
    pub async fn create_datasource(&self, datasource: &NewDatasource) -> Result<UpsertOutcome> {
        endpoints::create_datasource(
            &self.http,
            &self.base_url,
            &self.auth,
            datasource,
            self.max_retries,
        )
        .await
    }

    /// Get a datasource by its display name.
    pub async fn get_datasource_by_name(&self, name: &str) -> Result<Datasource> {
        endpoints::get_datasource_by_name(
            &self.http,
            &self.base_url,
            &self.auth,
            name,
            self.max_retries,
        )
        .await
    }

    /// Register a datasource and fetch its UID.
    pub async fn register_datasource(&self, spec: &DatasourceSpec) -> Result<RegisteredDatasource> {
        let outcome = self.create_datasource(&NewDatasource::from(spec)).await?;
        match outcome {
            UpsertOutcome::Created => info!(name = %spec.name, "Datasource created"),
            UpsertOutcome::AlreadyExists => info!(name = %spec.name, "Datasource already exists"),
        }

        let datasource = self.get_datasource_by_name(&spec.name).await?;
        info!(name = %spec.name, uid = %datasource.uid, "Datasource UID resolved");

        Ok(RegisteredDatasource {
            outcome,
            datasource,
        })
    }
}
