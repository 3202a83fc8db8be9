//! # Balance Endpoints

use shared::dto::wallet::Balance;

use super::client::ApiClient;
use crate::core::error::Result;

/// List balances across every currency/chain pair.
pub async fn list_balances(client: &ApiClient) -> Result<Vec<Balance>> {
    let value = client.get("/balances").await?;
    Ok(serde_json::from_value(value)?)
}

/// Get the balance for one currency on one chain.
pub async fn get_balance(client: &ApiClient, currency: &str, chain: &str) -> Result<Balance> {
    let value = client
        .get(&format!("/balances/{}/{}", currency, chain))
        .await?;
    Ok(serde_json::from_value(value)?)
}
