//! Data models for Grafana API requests and responses.
//!
//! Responsibilities:
//! - Define wire types for the health, datasource, folder, dashboard and
//!   alert rule provisioning endpoints.
//! - Define outcome and report types produced by the provisioning workflow.
//!
//! Does NOT handle:
//! - HTTP requests (see [`crate::endpoints`]).

mod alert_rules;
mod common;
mod dashboards;
mod datasources;
mod folders;
mod health;
mod provision;

pub use alert_rules::{AlertRulesImport, ProvisionedAlertRule};
pub use common::{GrafanaMessage, ImportOutcome, UpsertOutcome};
pub use dashboards::{DashboardImportRequest, DashboardImportResult};
pub use datasources::{Datasource, NewDatasource, RegisteredDatasource};
pub use folders::{Folder, NewFolder};
pub use health::HealthStatus;
pub use provision::{
    AlertRulesReport, DashboardReport, DatasourceReport, FolderReport, ProvisionReport,
    StepFailure,
};
