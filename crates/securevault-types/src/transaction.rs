//! Transaction types for SecureVault
//!
//! A transaction is written once, when a transfer is authorized, and is
//! never mutated or removed afterwards.

use chrono::{DateTime, TimeZone};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a generated transaction id
pub const TRANSACTION_ID_LEN: usize = 9;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Display format of `Transaction::date`, e.g. `19 Oct 2026, 03:04 pm`
pub const TRANSACTION_DATE_FORMAT: &str = "%d %b %Y, %I:%M %P";

/// Status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::Pending => write!(f, "pending"),
        }
    }
}

/// An outbound transfer recorded in an account's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque unique token
    pub id: String,
    /// Recipient mobile number (digits only)
    pub to: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Human-readable timestamp, see [`TRANSACTION_DATE_FORMAT`]
    pub date: String,
    pub status: TransactionStatus,
}

impl Transaction {
    /// Build a completed transaction stamped with `at`
    pub fn completed<Tz>(to: impl Into<String>, amount: Decimal, at: DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self {
            id: generate_transaction_id(),
            to: to.into(),
            amount,
            date: at.format(TRANSACTION_DATE_FORMAT).to_string(),
            status: TransactionStatus::Completed,
        }
    }
}

/// Generate a fresh 9-character base-36 transaction id
pub fn generate_transaction_id() -> String {
    let mut rng = rand::thread_rng();
    (0..TRANSACTION_ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
