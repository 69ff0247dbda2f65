//! Datasource endpoints.

use reqwest::Client;

use crate::auth::AuthStrategy;
use crate::endpoints::send_request_with_retry;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::{ClientError, Result};
use crate::models::{Datasource, NewDatasource, UpsertOutcome};

/// Create a datasource.
///
/// Grafana answers 409 when a datasource with the same name exists; that is
/// reported as [`UpsertOutcome::AlreadyExists`] rather than an error.
pub async fn create_datasource(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    datasource: &NewDatasource,
    max_retries: usize,
) -> Result<UpsertOutcome> {
    let url = format!("{}/api/datasources", base_url);

    let builder = auth.apply(client.post(&url)).json(datasource);

    match send_request_with_retry(builder, max_retries, "/api/datasources", "POST").await {
        Ok(_) => Ok(UpsertOutcome::Created),
        Err(ClientError::ApiError { status: 409, .. }) => Ok(UpsertOutcome::AlreadyExists),
        Err(e) => Err(e),
    }
}

/// Look up a datasource by its display name.
pub async fn get_datasource_by_name(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    name: &str,
    max_retries: usize,
) -> Result<Datasource> {
    let url = format!(
        "{}/api/datasources/name/{}",
        base_url,
        encode_path_segment(name)
    );

    let builder = auth.apply(client.get(&url));

    let response = send_request_with_retry(
        builder,
        max_retries,
        "/api/datasources/name/{name}",
        "GET",
    )
    .await?;

    response.json::<Datasource>().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse datasource '{}': {}", name, e))
    })
}
