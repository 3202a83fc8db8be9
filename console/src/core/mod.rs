//! # Core Abstractions
//!
//! Foundational types used throughout the client:
//!
//! - **[`error`]**: the error taxonomy every call resolves to
//!   ([`ApiError`], [`Result<T>`](Result))
//! - **[`service`]**: the [`WalletApi`](service::WalletApi) trait, the
//!   dependency-injection seam views mock in tests

pub mod error;
pub mod service;

pub use error::{ApiError, Result};
pub use service::WalletApi;
