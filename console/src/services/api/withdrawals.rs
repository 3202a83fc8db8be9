//! # Withdrawal Endpoints
//!
//! Submission takes the amount as operator-entered text and validates it
//! before any request is built: a non-numeric or non-positive amount, or an
//! empty destination, never reaches the wire.

use shared::dto::ops::CreateWithdrawRequest;
use shared::dto::wallet::WithdrawRecord;

use super::client::ApiClient;
use crate::core::error::Result;
use crate::utils::validation::{parse_amount, validate_to_address};

/// Submit a withdrawal request.
#[tracing::instrument(skip(client), fields(
    currency = %currency_symbol,
    chain = %chain_type,
    to = %to_address,
))]
pub async fn create_withdrawal(
    client: &ApiClient,
    currency_symbol: String,
    chain_type: String,
    to_address: String,
    amount: &str,
) -> Result<WithdrawRecord> {
    validate_to_address(&to_address)?;
    let amount = parse_amount(amount)?;

    let request = CreateWithdrawRequest {
        currency_symbol,
        chain_type,
        to_address,
        amount,
    };

    let value = client.post("/withdrawals", &request).await?;
    let record: WithdrawRecord = serde_json::from_value(value)?;

    tracing::info!(withdrawal_id = record.id, amount, "Withdrawal created");
    Ok(record)
}

/// List the user's withdrawal records.
pub async fn list_withdrawals(client: &ApiClient) -> Result<Vec<WithdrawRecord>> {
    let value = client.get("/withdrawals").await?;
    Ok(serde_json::from_value(value)?)
}

/// Fetch one withdrawal record by id.
pub async fn get_withdrawal(client: &ApiClient, id: i64) -> Result<WithdrawRecord> {
    let value = client.get(&format!("/withdrawals/{}", id)).await?;
    Ok(serde_json::from_value(value)?)
}
