//! # Transaction Endpoints

use shared::dto::wallet::ChainTransaction;

use super::client::ApiClient;
use crate::core::error::Result;

/// List on-chain transactions observed for the wallet's addresses.
pub async fn list_transactions(client: &ApiClient) -> Result<Vec<ChainTransaction>> {
    let value = client.get("/transactions").await?;
    Ok(serde_json::from_value(value)?)
}
