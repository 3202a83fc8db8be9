//! # Deposit Endpoints

use shared::dto::wallet::DepositRecord;

use super::client::ApiClient;
use crate::core::error::Result;

/// List deposit records produced by the block scanner.
pub async fn list_deposits(client: &ApiClient) -> Result<Vec<DepositRecord>> {
    let value = client.get("/deposits").await?;
    Ok(serde_json::from_value(value)?)
}

/// Fetch one deposit record by id.
pub async fn get_deposit(client: &ApiClient, id: i64) -> Result<DepositRecord> {
    let value = client.get(&format!("/deposits/{}", id)).await?;
    Ok(serde_json::from_value(value)?)
}
