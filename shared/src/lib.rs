//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the console client and the
//! custodial wallet backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication and user DTOs
//!   - **[`dto::envelope`]**: The `{ data, error?, message? }` response wrapper
//!   - **[`dto::wallet`]**: Domain records (addresses, balances, withdrawals, deposits)
//!   - **[`dto::ops`]**: Operator-tools requests (collection, block scanner)
//! - **[`utils`]**: Shared display helpers
//!
//! ## Wire Format
//!
//! All DTOs serialize with default `serde` behavior:
//! - Field names are **snake_case** in Rust and in JSON
//! - Optional fields deserialize from absent or `null` JSON values
//! - Domain records are passed through from the backend unmodified; the
//!   client neither validates nor rewrites them
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shared::dto::auth::LoginRequest;
//!
//! let request = LoginRequest {
//!     username: "alice".to_string(),
//!     password: "secret".to_string(),
//! };
//! # let _ = request;
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
