//! # Wallet Domain Records
//!
//! Records returned by the backend for the dashboard, address, withdrawal,
//! deposit, and transaction views. These are opaque value records: each fetch
//! is a fresh round trip and the client passes them to the caller unmodified.

use serde::{Deserialize, Serialize};

/// Deposit address owned by the custodial wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub id: i64,
    pub address: String,
    pub chain_type: String,
    pub status: i32,
    #[serde(default)]
    pub bind_time: Option<String>,
    pub index_num: i64,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub created_time: String,
}

/// Per-currency, per-chain balance snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Balance {
    pub id: i64,
    pub currency_symbol: String,
    pub chain_type: String,
    #[serde(default)]
    pub protocol: Option<String>,
    pub address: String,
    pub balance: f64,
    pub frozen: f64,
    pub total: f64,
    #[serde(default)]
    pub created_time: String,
    #[serde(default)]
    pub updated_time: String,
}

/// Withdrawal record as tracked by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WithdrawRecord {
    pub id: i64,
    pub currency_symbol: String,
    pub chain_type: String,
    #[serde(default)]
    pub protocol: String,
    pub user_id: i64,
    #[serde(default)]
    pub from_address: String,
    pub to_address: String,
    #[serde(default)]
    pub txid: Option<String>,
    pub amount: f64,
    pub fee: f64,
    pub total_amount: f64,
    #[serde(default)]
    pub unique_id: String,
    pub status: i32,
    #[serde(default)]
    pub block_height: Option<i64>,
    #[serde(default)]
    pub confirmations: i32,
    #[serde(default)]
    pub is_internal: bool,
    #[serde(default)]
    pub notify_status: bool,
    #[serde(default)]
    pub fail_reason: String,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub confirmed_time: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    /// 1: withdrawal, 2: withdrawal fee, 3: deposit, 4: collection, 5: admin
    #[serde(rename = "type", default)]
    pub entry_type: Option<i32>,
}

/// Deposit record produced by the block scanner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DepositRecord {
    pub id: i64,
    // the backend serializes this one without the underscore
    #[serde(rename = "userid", default)]
    pub user_id: i64,
    pub currency_symbol: String,
    pub chain_type: String,
    #[serde(default)]
    pub protocol: Option<String>,
    pub from_address: String,
    pub to_address: String,
    pub amount: f64,
    #[serde(default)]
    pub fee: f64,
    pub txid: String,
    #[serde(default)]
    pub unique_id: String,
    pub status: bool,
    #[serde(default)]
    pub is_internal: bool,
    #[serde(default)]
    pub confirmations: i32,
    #[serde(default)]
    pub block_height: Option<i64>,
    #[serde(default)]
    pub notify_status: bool,
    #[serde(default)]
    pub fail_reason: String,
    #[serde(default)]
    pub confirmed_time: Option<String>,
    #[serde(default)]
    pub created_time: String,
    #[serde(default)]
    pub updated_time: String,
}

/// Ledger entry for an on-chain movement touching a wallet address.
/// `entry_type` distinguishes deposits, withdrawals, collections, and fees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChainTransaction {
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    pub currency_symbol: String,
    pub chain_type: String,
    #[serde(default)]
    pub protocol: Option<String>,
    pub address: String,
    pub txid: String,
    #[serde(rename = "type")]
    pub entry_type: i32,
    pub amount: f64,
    #[serde(default)]
    pub fee: f64,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub block_height: Option<i64>,
    #[serde(default)]
    pub confirmations: i32,
    pub status: i32,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub created_time: String,
    #[serde(default)]
    pub updated_time: String,
}

/// Currency/chain pair configuration as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencyChainConfig {
    pub id: i64,
    pub currency_symbol: String,
    pub currency_name: String,
    pub chain_type: String,
    pub chain_name: String,
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub contract_address: Option<String>,
    pub decimals: i32,
    pub is_native: bool,
    pub deposit_enabled: bool,
    pub withdraw_enabled: bool,
    pub min_deposit_amount: f64,
    pub min_withdraw_amount: f64,
    pub max_withdraw_amount: f64,
    pub withdraw_fee: f64,
    pub withdraw_confirms: i32,
    pub deposit_confirms: i32,
    #[serde(default)]
    pub rpc_url: Option<String>,
    #[serde(default)]
    pub scan_url: Option<String>,
    #[serde(default)]
    pub icon_url: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_balance_deserializes_with_missing_optionals() {
        let balance: Balance = serde_json::from_value(json!({
            "id": 3,
            "currency_symbol": "ETH",
            "chain_type": "ethereum",
            "address": "0x1111111111111111111111111111111111111111",
            "balance": 1.5,
            "frozen": 0.0,
            "total": 1.5
        }))
        .unwrap();

        assert_eq!(balance.currency_symbol, "ETH");
        assert_eq!(balance.protocol, None);
        assert!(balance.created_time.is_empty());
    }

    #[test]
    fn test_withdraw_record_roundtrip() {
        let record: WithdrawRecord = serde_json::from_value(json!({
            "id": 12,
            "currency_symbol": "USDT",
            "chain_type": "tron",
            "protocol": "trc20",
            "user_id": 9,
            "to_address": "TXYZa1b2c3",
            "amount": 25.0,
            "fee": 1.0,
            "total_amount": 26.0,
            "status": 1,
            "txid": "deadbeef"
        }))
        .unwrap();

        assert_eq!(record.txid.as_deref(), Some("deadbeef"));
        assert_eq!(record.confirmations, 0);
        assert!(!record.is_internal);
    }
}
