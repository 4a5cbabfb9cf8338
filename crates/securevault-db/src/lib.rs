//! SecureVault Database Layer
//!
//! Client for the single remote collection that holds every account.
//!
//! # Architecture
//!
//! - **[`RestAccountStore`]**: the hosted store's PostgREST interface, spoken
//!   over HTTP with `reqwest`
//! - **[`MemoryAccountStore`]**: an in-process store with the same contract,
//!   for tests and demos
//!
//! Both sit behind the [`AccountStore`] trait so the session, ledger and SDK
//! layers never know which one they talk to.
//!
//! # Contract
//!
//! Lookups return `Ok(None)` when nothing matches; only transport or store
//! failures are errors. Every row read back is decoded into a typed
//! [`Account`], so a malformed row fails loudly instead of leaking through.

pub mod config;
pub mod error;
pub mod memory;
pub mod models;
pub mod rest;

use async_trait::async_trait;
use securevault_types::Account;

pub use config::StoreConfig;
pub use error::{DbError, DbResult};
pub use memory::MemoryAccountStore;
pub use models::AccountUpdate;
pub use rest::RestAccountStore;

/// Keyed access to the accounts collection
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Exact-match lookup on the unique email key
    async fn find_by_email(&self, email: &str) -> DbResult<Option<Account>>;

    /// Exact match on both email and PIN
    ///
    /// A wrong PIN and an unknown email both yield `Ok(None)`.
    async fn find_by_credentials(&self, email: &str, pin: &str) -> DbResult<Option<Account>>;

    /// Create a row in its opening state
    ///
    /// Balance is forced to the opening balance and both histories to empty,
    /// whatever the candidate carries. Fails with [`DbError::Duplicate`] when
    /// the email is taken.
    async fn insert(&self, candidate: &Account) -> DbResult<Account>;

    /// Merge `update` into the row keyed by `email` and return the full row
    ///
    /// Fails with [`DbError::NotFound`] when no row has that email and with
    /// [`DbError::Conflict`] when a guarded update no longer matches.
    async fn apply_update(&self, email: &str, update: &AccountUpdate) -> DbResult<Account>;
}
