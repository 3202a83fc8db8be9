//! # Currency Configuration Endpoints

use shared::dto::wallet::CurrencyChainConfig;

use super::client::ApiClient;
use crate::core::error::Result;

/// List every configured currency/chain pair.
pub async fn list_currencies(client: &ApiClient) -> Result<Vec<CurrencyChainConfig>> {
    let value = client.get("/currencies").await?;
    Ok(serde_json::from_value(value)?)
}

/// Fetch the configuration for one currency symbol.
pub async fn get_currency(client: &ApiClient, symbol: &str) -> Result<CurrencyChainConfig> {
    let value = client.get(&format!("/currencies/{}", symbol)).await?;
    Ok(serde_json::from_value(value)?)
}

/// Chains the backend can derive addresses and scan blocks for.
pub async fn supported_chains(client: &ApiClient) -> Result<Vec<String>> {
    let value = client.get("/currencies/chains/supported").await?;
    Ok(serde_json::from_value(value)?)
}
