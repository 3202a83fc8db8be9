//! # Service Traits
//!
//! Trait over every backend operation, enabling dependency injection: views
//! hold an `Arc<dyn WalletApi>` and tests substitute a mock without touching
//! the network.

use async_trait::async_trait;
use shared::dto::auth::LoginResponse;
use shared::dto::ops::{HealthStatus, JobStatus};
use shared::dto::wallet::{
    Address, Balance, ChainTransaction, CurrencyChainConfig, DepositRecord, WithdrawRecord,
};

use crate::core::error::Result;
use crate::services::api;
use crate::services::api::ApiClient;

/// One method per backend endpoint; the concrete implementation performs
/// exactly one HTTP request per call.
#[async_trait]
pub trait WalletApi: Send + Sync {
    // Auth
    async fn login(&self, username: String, password: String) -> Result<LoginResponse>;
    async fn register(
        &self,
        username: String,
        password: String,
        email: String,
    ) -> Result<LoginResponse>;
    fn logout(&self);

    // Addresses
    async fn list_addresses(&self) -> Result<Vec<Address>>;
    async fn generate_address(&self, chain_type: String) -> Result<Address>;
    async fn bind_address(&self, address_id: i64, user_id: i64) -> Result<Address>;

    // Balances
    async fn list_balances(&self) -> Result<Vec<Balance>>;
    async fn get_balance(&self, currency: &str, chain: &str) -> Result<Balance>;

    // Withdrawals
    async fn create_withdrawal(
        &self,
        currency_symbol: String,
        chain_type: String,
        to_address: String,
        amount: &str,
    ) -> Result<WithdrawRecord>;
    async fn list_withdrawals(&self) -> Result<Vec<WithdrawRecord>>;
    async fn get_withdrawal(&self, id: i64) -> Result<WithdrawRecord>;

    // Deposits and transactions
    async fn list_deposits(&self) -> Result<Vec<DepositRecord>>;
    async fn get_deposit(&self, id: i64) -> Result<DepositRecord>;
    async fn list_transactions(&self) -> Result<Vec<ChainTransaction>>;

    // Currency configuration
    async fn list_currencies(&self) -> Result<Vec<CurrencyChainConfig>>;
    async fn get_currency(&self, symbol: &str) -> Result<CurrencyChainConfig>;
    async fn supported_chains(&self) -> Result<Vec<String>>;

    // Operator tools
    async fn trigger_collection(&self, symbol: String, address: String) -> Result<String>;
    async fn scan_blocks(
        &self,
        symbol: String,
        start_block: u64,
        end_block: u64,
        addresses: &str,
    ) -> Result<String>;
    async fn scan_once(&self) -> Result<String>;
    async fn start_scanner(&self) -> Result<JobStatus>;
    async fn stop_scanner(&self) -> Result<JobStatus>;
    async fn scanner_status(&self) -> Result<JobStatus>;
    async fn start_collection(&self) -> Result<String>;
    async fn stop_collection(&self) -> Result<String>;

    async fn health(&self) -> Result<HealthStatus>;
}

#[async_trait]
impl WalletApi for ApiClient {
    async fn login(&self, username: String, password: String) -> Result<LoginResponse> {
        api::auth::login(self, username, password).await
    }

    async fn register(
        &self,
        username: String,
        password: String,
        email: String,
    ) -> Result<LoginResponse> {
        api::auth::register(self, username, password, email).await
    }

    fn logout(&self) {
        api::auth::logout(self)
    }

    async fn list_addresses(&self) -> Result<Vec<Address>> {
        api::addresses::list_addresses(self).await
    }

    async fn generate_address(&self, chain_type: String) -> Result<Address> {
        api::addresses::generate_address(self, chain_type).await
    }

    async fn bind_address(&self, address_id: i64, user_id: i64) -> Result<Address> {
        api::addresses::bind_address(self, address_id, user_id).await
    }

    async fn list_balances(&self) -> Result<Vec<Balance>> {
        api::balances::list_balances(self).await
    }

    async fn get_balance(&self, currency: &str, chain: &str) -> Result<Balance> {
        api::balances::get_balance(self, currency, chain).await
    }

    async fn create_withdrawal(
        &self,
        currency_symbol: String,
        chain_type: String,
        to_address: String,
        amount: &str,
    ) -> Result<WithdrawRecord> {
        api::withdrawals::create_withdrawal(self, currency_symbol, chain_type, to_address, amount)
            .await
    }

    async fn list_withdrawals(&self) -> Result<Vec<WithdrawRecord>> {
        api::withdrawals::list_withdrawals(self).await
    }

    async fn get_withdrawal(&self, id: i64) -> Result<WithdrawRecord> {
        api::withdrawals::get_withdrawal(self, id).await
    }

    async fn list_deposits(&self) -> Result<Vec<DepositRecord>> {
        api::deposits::list_deposits(self).await
    }

    async fn get_deposit(&self, id: i64) -> Result<DepositRecord> {
        api::deposits::get_deposit(self, id).await
    }

    async fn list_transactions(&self) -> Result<Vec<ChainTransaction>> {
        api::transactions::list_transactions(self).await
    }

    async fn list_currencies(&self) -> Result<Vec<CurrencyChainConfig>> {
        api::currencies::list_currencies(self).await
    }

    async fn get_currency(&self, symbol: &str) -> Result<CurrencyChainConfig> {
        api::currencies::get_currency(self, symbol).await
    }

    async fn supported_chains(&self) -> Result<Vec<String>> {
        api::currencies::supported_chains(self).await
    }

    async fn trigger_collection(&self, symbol: String, address: String) -> Result<String> {
        api::ops::trigger_collection(self, symbol, address).await
    }

    async fn scan_blocks(
        &self,
        symbol: String,
        start_block: u64,
        end_block: u64,
        addresses: &str,
    ) -> Result<String> {
        api::ops::scan_blocks(self, symbol, start_block, end_block, addresses).await
    }

    async fn scan_once(&self) -> Result<String> {
        api::ops::scan_once(self).await
    }

    async fn start_scanner(&self) -> Result<JobStatus> {
        api::ops::start_scanner(self).await
    }

    async fn stop_scanner(&self) -> Result<JobStatus> {
        api::ops::stop_scanner(self).await
    }

    async fn scanner_status(&self) -> Result<JobStatus> {
        api::ops::scanner_status(self).await
    }

    async fn start_collection(&self) -> Result<String> {
        api::ops::start_collection(self).await
    }

    async fn stop_collection(&self) -> Result<String> {
        api::ops::stop_collection(self).await
    }

    async fn health(&self) -> Result<HealthStatus> {
        api::ops::health(self).await
    }
}
