//! # Operator Tools Endpoints
//!
//! Manual fund collection and block-scanner control. The jobs themselves run
//! in the backend; these calls only trigger and observe them. Scan and
//! collection parameters come straight from operator form fields, so they are
//! validated here before any request is built.

use shared::dto::ops::{HealthStatus, JobStatus, ScanBlocksRequest, TriggerCollectionRequest};

use super::client::ApiClient;
use crate::core::error::Result;
use crate::utils::validation::{parse_address_list, validate_collection, validate_scan_range};

/// Sweep funds from one deposit address into the custodial wallet.
#[tracing::instrument(skip(client), fields(symbol = %symbol, address = %address))]
pub async fn trigger_collection(
    client: &ApiClient,
    symbol: String,
    address: String,
) -> Result<String> {
    validate_collection(&symbol, &address)?;

    let request = TriggerCollectionRequest { symbol, address };
    let value = client.post("/ops/collection/trigger", &request).await?;
    Ok(serde_json::from_value(value)?)
}

/// Re-scan an explicit block range for deposits to the given addresses.
///
/// `addresses` is the raw comma-separated operator input; blank entries are
/// dropped before validation.
#[tracing::instrument(skip(client, addresses), fields(symbol = %symbol))]
pub async fn scan_blocks(
    client: &ApiClient,
    symbol: String,
    start_block: u64,
    end_block: u64,
    addresses: &str,
) -> Result<String> {
    let addresses = parse_address_list(addresses);
    validate_scan_range(start_block, end_block, &addresses)?;

    let request = ScanBlocksRequest {
        symbol,
        start_block,
        end_block,
        addresses,
    };
    let value = client.post("/ops/scanner/scan-blocks", &request).await?;

    tracing::info!(start_block, end_block, "Block scan requested");
    Ok(serde_json::from_value(value)?)
}

/// Run one scanner pass over the latest blocks.
pub async fn scan_once(client: &ApiClient) -> Result<String> {
    let value = client.post_empty("/ops/scanner/scan-once").await?;
    Ok(serde_json::from_value(value)?)
}

/// Start the continuous block scanner.
pub async fn start_scanner(client: &ApiClient) -> Result<JobStatus> {
    let value = client.post_empty("/ops/scanner/start").await?;
    Ok(serde_json::from_value(value)?)
}

/// Stop the continuous block scanner.
pub async fn stop_scanner(client: &ApiClient) -> Result<JobStatus> {
    let value = client.post_empty("/ops/scanner/stop").await?;
    Ok(serde_json::from_value(value)?)
}

/// Current scanner job status.
pub async fn scanner_status(client: &ApiClient) -> Result<JobStatus> {
    let value = client.get("/ops/scanner/status").await?;
    Ok(serde_json::from_value(value)?)
}

/// Start the periodic collection job. The backend acknowledges with a plain
/// `"started"` string.
pub async fn start_collection(client: &ApiClient) -> Result<String> {
    let value = client.post_empty("/ops/collection/start").await?;
    Ok(serde_json::from_value(value)?)
}

/// Stop the periodic collection job.
pub async fn stop_collection(client: &ApiClient) -> Result<String> {
    let value = client.post_empty("/ops/collection/stop").await?;
    Ok(serde_json::from_value(value)?)
}

/// Backend health probe. Served at the server root, outside `/api/v1`, and
/// returned without an envelope.
pub async fn health(client: &ApiClient) -> Result<HealthStatus> {
    let value = client
        .execute(client.http.get(client.root_url("/health")))
        .await?;
    Ok(serde_json::from_value(value)?)
}
