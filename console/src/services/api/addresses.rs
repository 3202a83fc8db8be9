//! # Address Endpoints
//!
//! Deposit-address listing, generation, and binding.

use shared::dto::ops::{BindAddressRequest, GenerateAddressRequest};
use shared::dto::wallet::Address;

use super::client::ApiClient;
use crate::core::error::Result;

/// List every address in the wallet's address library.
pub async fn list_addresses(client: &ApiClient) -> Result<Vec<Address>> {
    let value = client.get("/addresses").await?;
    Ok(serde_json::from_value(value)?)
}

/// Ask the backend to derive a fresh address on the given chain.
#[tracing::instrument(skip(client), fields(chain_type = %chain_type))]
pub async fn generate_address(client: &ApiClient, chain_type: String) -> Result<Address> {
    let request = GenerateAddressRequest { chain_type };
    let value = client.post("/addresses/generate", &request).await?;
    Ok(serde_json::from_value(value)?)
}

/// Bind a pre-generated library address to a user.
#[tracing::instrument(skip(client))]
pub async fn bind_address(client: &ApiClient, address_id: i64, user_id: i64) -> Result<Address> {
    let request = BindAddressRequest {
        address_id,
        user_id,
    };
    let value = client.post("/addresses/bind", &request).await?;
    Ok(serde_json::from_value(value)?)
}
