//! SecureVault Types - Canonical domain types for the SecureVault client
//!
//! This crate contains the record shapes shared by every other securevault
//! crate, with zero dependencies on them:
//!
//! - [`Account`]: the aggregate root, one row per user
//! - [`Transaction`]: an immutable outbound transfer record
//! - [`ThreatLog`] and [`RiskVerdict`]: the outcome of one phishing scan
//!
//! # Ownership
//!
//! `Account` is the only record with an identity of its own (its email).
//! Transactions and threat logs live inside the account's append-only
//! sequences and have no lifecycle outside it.
//!
//! # Wire Format
//!
//! Field names match the remote `accounts` collection exactly, so these types
//! decode rows straight from the store and encode updates back to it.

pub mod account;
pub mod error;
pub mod money;
pub mod threat;
pub mod transaction;

pub use account::*;
pub use error::*;
pub use money::*;
pub use threat::*;
pub use transaction::*;

/// Re-exported so downstream crates agree on one decimal type
pub use rust_decimal::Decimal;
