//! # Backend API Client Module
//!
//! HTTP client for the custodial wallet backend. One module per endpoint
//! group; every call goes through the shared request pipeline in
//! [`client`] (auth header attachment, 401 eviction, envelope unwrapping).
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs           - Module exports
//! ├── client.rs        - ApiClient and the request/response pipeline
//! ├── auth.rs          - Login, registration, logout
//! ├── addresses.rs     - Address library (list, generate, bind)
//! ├── balances.rs      - Balance queries
//! ├── withdrawals.rs   - Withdrawal submission and history
//! ├── deposits.rs      - Deposit history
//! ├── transactions.rs  - On-chain transaction history
//! ├── currencies.rs    - Currency/chain configuration
//! └── ops.rs           - Operator tools (collection, block scanner, health)
//! ```

pub mod addresses;
pub mod auth;
pub mod balances;
pub mod client;
pub mod currencies;
pub mod deposits;
pub mod ops;
pub mod transactions;
pub mod withdrawals;


pub use client::ApiClient;
