//! Readiness polling for [`GrafanaClient`].
//!
//! # What this module handles:
//! - Polling `GET /api/health` until Grafana answers 200
//!
//! # What this module does NOT handle:
//! - The single health request (in [`crate::endpoints::get_health`])
//!
//! # Invariants
//! - At most `attempts` requests are sent; there is no sleep after the last one.
//! - Any non-200 status and any transport error count as "not ready yet".

use grafana_config::ReadinessConfig;
use tracing::{debug, info};

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::HealthStatus;

impl GrafanaClient {
    /// Check Grafana's health once.
    pub async fn get_health(&self) -> Result<HealthStatus> {
        endpoints::get_health(&self.http, &self.base_url).await
    }

    /// Block until Grafana reports healthy.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotReady`] when every attempt failed.
    pub async fn wait_for_ready(&self, readiness: &ReadinessConfig) -> Result<HealthStatus> {
        let attempts = readiness.attempts;
        let mut last_error = None;

        for attempt in 1..=attempts {
            match self.get_health().await {
                Ok(health) => {
                    info!(
                        version = health.version.as_deref().unwrap_or("unknown"),
                        "Grafana is ready"
                    );
                    return Ok(health);
                }
                Err(e) => {
                    debug!(attempt, error = %e, "Health check failed");
                    last_error = Some(e.to_string());
                }
            }

            info!("Waiting for Grafana... ({}/{})", attempt, attempts);

            if attempt < attempts {
                tokio::time::sleep(readiness.delay).await;
            }
        }

        Err(ClientError::NotReady {
            attempts,
            last_error,
        })
    }
}
