//! Grafana HTTP API client.
//!
//! This crate provides a typed client for the parts of the Grafana API used
//! to provision an instance: health, datasources, folders, dashboards and
//! the alert rule provisioning API. It also carries the provisioning
//! workflow itself and the logging setup shared by the binary.

mod auth;
pub mod client;
mod datasource_uids;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod telemetry;

pub use auth::AuthStrategy;
pub use client::GrafanaClient;
pub use client::builder::GrafanaClientBuilder;
pub use datasource_uids::DatasourceUids;
pub use error::{ClientError, Result};
pub use models::{
    AlertRulesImport, AlertRulesReport, DashboardImportRequest, DashboardImportResult,
    DashboardReport, Datasource, DatasourceReport, Folder, FolderReport, HealthStatus,
    ImportOutcome, NewDatasource, NewFolder, ProvisionReport, ProvisionedAlertRule,
    RegisteredDatasource, StepFailure, UpsertOutcome,
};
pub use telemetry::{TracingConfig, TracingError, TracingGuard};
