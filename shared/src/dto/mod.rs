//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the console client and the wallet backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Authentication, registration, and user DTOs
//! - [`envelope`] - The `{ data, error?, message? }` response wrapper
//! - [`wallet`] - Domain records: addresses, balances, withdrawals, deposits,
//!   on-chain transactions, currency/chain configuration
//! - [`ops`] - Operator-tools requests (fund collection, block scanner)
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Deserialize from absent or `null` values
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example Request/Response Pair
//!
//! ```text
//! POST /api/v1/auth/login
//! Content-Type: application/json
//!
//! { "username": "operator", "password": "secret" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "data": { "token": "eyJhbGciOi...", "user": { "id": 1, "username": "operator" } } }
//! ```

pub mod auth;
pub mod envelope;
pub mod ops;
pub mod wallet;

pub use auth::*;
pub use envelope::*;
pub use ops::*;
pub use wallet::*;
