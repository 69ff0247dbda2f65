//! Retry helper for HTTP requests with exponential backoff.
//!
//! Requests answered with HTTP 429 (Too Many Requests) are retried with
//! exponential backoff; every other non-success status becomes a
//! [`ClientError::ApiError`] carrying Grafana's error message.

use reqwest::{RequestBuilder, Response};
use std::time::Duration;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::GrafanaMessage;

/// Sends an HTTP request with automatic retry logic for HTTP 429 responses.
///
/// - Backoff doubles on every attempt (1s, 2s, 4s, ...).
/// - `Retry-After` (seconds) overrides the computed backoff when present.
/// - `max_retries` of 0 sends the request exactly once.
///
/// # Errors
///
/// Returns `ClientError::MaxRetriesExceeded` when all retry attempts are
/// exhausted and `ClientError::ApiError` for any other non-2xx status.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
    endpoint: &str,
    method: &str,
) -> Result<Response> {
    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                debug!(endpoint, "Request builder cannot be cloned, single attempt only");
                let response = builder.send().await?;
                return check_status(response).await;
            }
        };

        debug!(endpoint, method, attempt = attempt + 1, "Sending request");
        let response = attempt_builder.send().await?;

        if !ClientError::is_retryable_status(response.status().as_u16()) {
            if attempt > 0 {
                debug!(endpoint, attempt = attempt + 1, "Request succeeded after retry");
            }
            return check_status(response).await;
        }

        if attempt < max_retries {
            let backoff = retry_after(&response)
                .unwrap_or_else(|| Duration::from_secs(2u64.pow(attempt as u32)));
            debug!(
                endpoint,
                attempt = attempt + 1,
                max_retries = max_retries + 1,
                backoff_ms = backoff.as_millis() as u64,
                "Rate limited (HTTP 429), retrying with exponential backoff"
            );
            tokio::time::sleep(backoff).await;
        }
    }

    debug!(endpoint, "Max retries exhausted for rate-limited request");
    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

/// Parse a `Retry-After` header given in seconds.
fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Turn a non-success response into an `ApiError`.
async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    // Grafana errors are usually {"message": "..."}
    let message = match serde_json::from_str::<GrafanaMessage>(&body) {
        Ok(m) => m.message,
        Err(_) => body,
    };

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}
