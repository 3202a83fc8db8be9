//! # Custodial Wallet Console Client
//!
//! Client library for the vaultd custodial wallet backend. The console views
//! (dashboard, addresses, withdrawals, deposits, transactions, operator
//! tools) are thin consumers of this crate: it owns the HTTP transport, the
//! bearer-token session, response normalization, and input validation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                  console (this crate)               │
//! ├─────────────────────────────────────────────────────┤
//! │  services::api   - one function per backend endpoint │
//! │  session         - bearer token + user, persisted    │
//! │  core            - error taxonomy, WalletApi trait   │
//! │  utils           - operator-input validation         │
//! └──────────────────────────┬──────────────────────────┘
//!                            │ HTTP/JSON (reqwest)
//!                            ▼
//!               ┌─────────────────────────┐
//!               │  Wallet backend          │
//!               │  /api/v1/auth/*          │
//!               │  /api/v1/addresses/*     │
//!               │  /api/v1/balances/*      │
//!               │  /api/v1/withdrawals/*   │
//!               │  /api/v1/deposits/*      │
//!               │  /api/v1/transactions    │
//!               │  /api/v1/currencies/*    │
//!               │  /api/v1/ops/*           │
//!               └─────────────────────────┘
//! ```
//!
//! ## Session Lifecycle
//!
//! The session is the only process-wide state. It is created by a successful
//! login or registration, attached as `Authorization: Bearer <token>` to
//! every request while held, and destroyed either by an explicit logout or
//! automatically when any endpoint answers 401 — in which case a
//! [`SessionEvent::SessionExpired`](session::SessionEvent) is emitted so the
//! view layer can navigate back to the login entry point. State survives
//! restarts through a [`SessionStore`](session::SessionStore).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use console::services::api::ApiClient;
//! use console::session::{FileStore, Session};
//! use console::core::WalletApi;
//!
//! # async fn run() -> console::core::Result<()> {
//! let session = Session::new(FileStore::open("console-session.json"));
//! let client = ApiClient::from_env(session);
//!
//! client.login("operator".into(), "secret".into()).await?;
//! let balances = client.list_balances().await?;
//! # let _ = balances;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod services;
pub mod session;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::{ApiError, Result, WalletApi};
pub use crate::services::api::ApiClient;
pub use crate::session::{Session, SessionEvent};
