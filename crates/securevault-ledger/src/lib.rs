//! SecureVault Ledger - outbound transfer authorization
//!
//! A transfer is a single guarded write to the sender's account row:
//! - the new balance (`balance - amount`)
//! - the history with one `completed` transaction appended
//!
//! # Invariants
//!
//! 1. A transfer never leaves less than the minimum reserve behind
//! 2. Rejected transfers make no remote call
//! 3. The caller's view is only ever replaced by the row the store returns

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use securevault_db::{AccountStore, AccountUpdate, DbError};
use securevault_types::{format_inr, Account, Transaction, MINIMUM_RESERVE};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while authorizing a transfer
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Input rejected before any remote call
    #[error("{0}")]
    Validation(String),

    #[error(
        "Transfer of {} would leave {}; a minimum balance of {} must be maintained",
        inr(.amount),
        remaining(.balance, .amount),
        inr(.reserve)
    )]
    InsufficientReserve {
        balance: Decimal,
        amount: Decimal,
        reserve: Decimal,
    },

    #[error(transparent)]
    Store(#[from] DbError),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

fn inr(amount: &Decimal) -> String {
    format_inr(*amount)
}

fn remaining(balance: &Decimal, amount: &Decimal) -> String {
    format_inr(*balance - *amount)
}

/// Transfer policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Balance that must remain after every transfer
    pub minimum_reserve: Decimal,
    /// Send the balance read by the caller as an update precondition
    pub guard_concurrent_updates: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            minimum_reserve: std::env::var("SECUREVAULT_MIN_RESERVE")
                .ok()
                .and_then(|s| Decimal::from_str(s.trim()).ok())
                .unwrap_or(MINIMUM_RESERVE),
            guard_concurrent_updates: std::env::var("SECUREVAULT_GUARD_UPDATES")
                .map(|v| !matches!(v.as_str(), "0" | "false" | "off"))
                .unwrap_or(true),
        }
    }
}

impl LedgerConfig {
    /// Create config from environment variables, loading `.env` first
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::default()
    }

    pub fn with_minimum_reserve(mut self, reserve: Decimal) -> Self {
        self.minimum_reserve = reserve;
        self
    }
}

/// Authorizes and records outbound transfers
#[derive(Clone)]
pub struct TransferAuthorizer {
    store: Arc<dyn AccountStore>,
    config: LedgerConfig,
}

impl TransferAuthorizer {
    pub fn new(store: Arc<dyn AccountStore>, config: LedgerConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Reserve policy: `balance - amount >= minimum_reserve`
    pub fn check_reserve(&self, balance: Decimal, amount: Decimal) -> Result<()> {
        if balance - amount < self.config.minimum_reserve {
            return Err(LedgerError::InsufficientReserve {
                balance,
                amount,
                reserve: self.config.minimum_reserve,
            });
        }
        Ok(())
    }

    /// Debit `amount` from `account` towards `recipient`
    ///
    /// Returns the account row as stored after the write. On any error the
    /// stored row is unchanged and the caller should keep its current view.
    pub async fn authorize(&self, account: &Account, amount: Decimal, recipient: &str) -> Result<Account> {
        let recipient = normalize_recipient(recipient)?;
        if amount <= Decimal::ZERO {
            return Err(LedgerError::Validation(
                "Amount must be greater than zero".to_string(),
            ));
        }
        self.check_reserve(account.balance, amount)?;

        let transaction = Transaction::completed(recipient, amount, chrono::Local::now());
        let new_balance = account.balance - amount;

        let mut history = account.transactions.clone();
        history.push(transaction.clone());

        let mut update = AccountUpdate::new()
            .with_balance(new_balance)
            .with_transactions(history);
        if self.config.guard_concurrent_updates {
            update = update.guarded_by(account.balance);
        }

        debug!(email = %account.email, tx = %transaction.id, "Submitting transfer");
        let stored = self.store.apply_update(&account.email, &update).await?;

        info!(
            email = %account.email,
            tx = %transaction.id,
            to = %transaction.to,
            amount = %amount,
            balance = %stored.balance,
            "Transfer completed"
        );
        Ok(stored)
    }
}

/// Recipient account number with whitespace removed; digits only
pub fn normalize_recipient(recipient: &str) -> Result<String> {
    let digits: String = recipient.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.is_empty() {
        return Err(LedgerError::Validation(
            "Recipient account number is required".to_string(),
        ));
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(LedgerError::Validation(
            "Recipient account number must contain digits only".to_string(),
        ));
    }
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use securevault_db::MemoryAccountStore;

    fn authorizer() -> TransferAuthorizer {
        TransferAuthorizer::new(
            Arc::new(MemoryAccountStore::new()),
            LedgerConfig::default().with_minimum_reserve(dec!(500)),
        )
    }

    #[test]
    fn test_reserve_boundary() {
        let ledger = authorizer();
        assert!(ledger.check_reserve(dec!(1000), dec!(500)).is_ok());
        assert!(matches!(
            ledger.check_reserve(dec!(1000), dec!(501)),
            Err(LedgerError::InsufficientReserve { .. })
        ));
        assert!(ledger.check_reserve(dec!(1000), dec!(500.01)).is_err());
    }

    #[test]
    fn test_normalize_recipient() {
        assert_eq!(normalize_recipient(" 98765 43210 ").unwrap(), "9876543210");
        assert!(normalize_recipient("   ").is_err());
        assert!(normalize_recipient("98-76").is_err());
    }

    #[test]
    fn test_reserve_message() {
        let err = authorizer().check_reserve(dec!(1000), dec!(600)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Transfer of ₹600.00 would leave ₹400.00; a minimum balance of ₹500.00 must be maintained"
        );
    }
}
