//! # Services Module
//!
//! External integrations. The console talks to exactly one system, the
//! wallet backend, over HTTP/JSON:
//!
//! ```text
//! services/
//! └── api/        - Backend HTTP API client
//!                   (auth, addresses, balances, withdrawals, deposits,
//!                    transactions, currencies, operator tools)
//! ```

pub mod api;
