//! The provisioning workflow for [`GrafanaClient`].
//!
//! Shared by every CLI command so that `setup` and the single-step commands
//! behave identically.
//!
//! # What this module handles:
//! - Running the steps in order: datasources, settle delay, folder,
//!   dashboards, alert rules
//! - Collecting outcomes and non-fatal failures into a [`ProvisionReport`]
//!
//! # What this module does NOT handle:
//! - Readiness (callers run [`GrafanaClient::wait_for_ready`] first)
//!
//! # Invariants
//! - No step failure aborts the workflow; each one is logged and recorded.
//! - The UID map is complete before alert rules are read.

use grafana_config::ProvisionPlan;
use tracing::info;

use crate::client::GrafanaClient;
use crate::datasource_uids::DatasourceUids;
use crate::models::{
    AlertRulesReport, DashboardReport, DatasourceReport, FolderReport, ProvisionReport,
};

impl GrafanaClient {
    /// Run the whole plan against Grafana.
    pub async fn provision(&self, plan: &ProvisionPlan) -> ProvisionReport {
        let mut report = ProvisionReport::default();

        let uids = self.provision_datasources(plan, &mut report).await;

        if !plan.settle_delay.is_zero() {
            info!(
                delay_secs = plan.settle_delay.as_secs_f64(),
                "Waiting for datasources to settle"
            );
            tokio::time::sleep(plan.settle_delay).await;
        }

        let folder_ready = self.provision_folder(plan, &mut report).await;
        self.provision_dashboards(plan, folder_ready, &mut report)
            .await;
        self.provision_alert_rules(plan, &uids, &mut report).await;

        info!(
            datasources = report.datasources.len(),
            dashboards = report.dashboards.len(),
            failures = report.failures.len(),
            "Provisioning finished"
        );

        report
    }

    /// Register every datasource in the plan and collect their UIDs.
    ///
    /// A datasource whose registration or lookup fails is left out of the map.
    pub async fn provision_datasources(
        &self,
        plan: &ProvisionPlan,
        report: &mut ProvisionReport,
    ) -> DatasourceUids {
        let mut uids = DatasourceUids::new();

        for spec in &plan.datasources {
            match self.register_datasource(spec).await {
                Ok(registered) => {
                    uids.insert(&spec.key, registered.datasource.uid.clone());
                    report.datasources.push(DatasourceReport {
                        key: spec.key.clone(),
                        name: spec.name.clone(),
                        outcome: registered.outcome,
                        uid: registered.datasource.uid,
                    });
                }
                Err(e) => report.record_failure(format!("datasource:{}", spec.key), e),
            }
        }

        uids
    }

    /// Create the plan's folder. Returns whether the folder is usable.
    pub async fn provision_folder(&self, plan: &ProvisionPlan, report: &mut ProvisionReport) -> bool {
        match self.ensure_folder(&plan.folder).await {
            Ok(outcome) => {
                report.folder = Some(FolderReport {
                    uid: plan.folder.uid.clone(),
                    title: plan.folder.title.clone(),
                    outcome,
                });
                true
            }
            Err(e) => {
                report.record_failure(format!("folder:{}", plan.folder.uid), e);
                false
            }
        }
    }

    /// Import every dashboard in the plan.
    ///
    /// Dashboards go to the General folder when the plan folder is unusable.
    pub async fn provision_dashboards(
        &self,
        plan: &ProvisionPlan,
        folder_ready: bool,
        report: &mut ProvisionReport,
    ) {
        let folder_uid = folder_ready.then_some(plan.folder.uid.as_str());

        for spec in &plan.dashboards {
            info!(title = %spec.title, path = %spec.path.display(), "Importing dashboard");
            match self.import_dashboard_file(&spec.path, folder_uid).await {
                Ok(outcome) => report.dashboards.push(DashboardReport {
                    title: spec.title.clone(),
                    path: spec.path.clone(),
                    outcome,
                }),
                Err(e) => report.record_failure(format!("dashboard:{}", spec.title), e),
            }
        }
    }

    /// Import the plan's alert rules using an already populated UID map.
    pub async fn provision_alert_rules(
        &self,
        plan: &ProvisionPlan,
        uids: &DatasourceUids,
        report: &mut ProvisionReport,
    ) {
        let Some(spec) = &plan.alert_rules else {
            return;
        };

        info!(path = %spec.path.display(), "Importing alert rules");
        match self
            .import_alert_rules_file(&spec.path, uids, &plan.folder.uid)
            .await
        {
            Ok(outcome) => {
                report.alert_rules = Some(AlertRulesReport {
                    path: spec.path.clone(),
                    outcome,
                })
            }
            Err(e) => report.record_failure(format!("alert-rules:{}", spec.path.display()), e),
        }
    }
}
