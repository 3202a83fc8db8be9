//! # Request Bodies and Operator-Tools DTOs
//!
//! Request payloads sent by the console plus the small status records the
//! ops endpoints return. Scanner and collection jobs run entirely in the
//! backend; the console only triggers and observes them.

use serde::{Deserialize, Serialize};

/// Request a fresh deposit address on the given chain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateAddressRequest {
    pub chain_type: String,
}

/// Bind a pre-generated address from the address library to a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BindAddressRequest {
    pub address_id: i64,
    pub user_id: i64,
}

/// Create a withdrawal request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateWithdrawRequest {
    pub currency_symbol: String,
    pub chain_type: String,
    pub to_address: String,
    pub amount: f64,
}

/// Manually sweep funds from one deposit address to the custodial wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TriggerCollectionRequest {
    pub symbol: String,
    pub address: String,
}

/// Scan an explicit block range for deposits to the given addresses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanBlocksRequest {
    pub symbol: String,
    pub start_block: u64,
    pub end_block: u64,
    pub addresses: Vec<String>,
}

/// Scanner/collection job status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobStatus {
    pub running: bool,
}

/// Backend health probe response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
}
