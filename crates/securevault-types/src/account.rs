//! Account - the aggregate root
//!
//! One row per user, keyed by `email`. Balance and histories are mutated in
//! place by transfers and scan logging; rows are never deleted.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{ThreatLog, Transaction, OPENING_BALANCE};

/// A user account as stored in the remote `accounts` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Store-assigned row id; opaque and never used as a key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    pub name: String,
    /// Unique key
    pub email: String,
    /// 4-digit PIN, compared verbatim by the store
    pub pin: String,
    /// Stored as entered, never used for authentication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    /// Outbound transfers, oldest first
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transactions: Vec<Transaction>,
    /// Phishing scans, oldest first
    #[serde(default, deserialize_with = "null_as_empty")]
    pub threat_logs: Vec<ThreatLog>,
}

impl Account {
    /// A registration candidate, already in its opening state
    pub fn candidate(
        name: impl Into<String>,
        email: impl Into<String>,
        pin: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            pin: pin.into(),
            password: Some(password.into()),
            balance: OPENING_BALANCE,
            transactions: Vec::new(),
            threat_logs: Vec::new(),
        }
    }

    /// Copy of this candidate with the opening state forced
    ///
    /// Whatever balance or history the caller supplied is discarded.
    pub fn opening(&self) -> Self {
        Self {
            id: None,
            name: self.name.clone(),
            email: self.email.clone(),
            pin: self.pin.clone(),
            password: self.password.clone(),
            balance: OPENING_BALANCE,
            transactions: Vec::new(),
            threat_logs: Vec::new(),
        }
    }

    /// Transactions newest first, the order the dashboard lists them in
    pub fn recent_transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().rev()
    }

    /// First letter of the name, used as an avatar
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next().map(|c| c.to_ascii_uppercase())
    }
}

/// Rows written by older clients may hold `null` instead of `[]`
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_opening_discards_caller_state() {
        let mut candidate = Account::candidate("Asha", "asha@example.com", "4321", "hunter2");
        candidate.balance = dec!(99999);
        candidate.transactions.push(Transaction::completed(
            "1234567890",
            dec!(10),
            chrono::Utc::now(),
        ));

        let opened = candidate.opening();
        assert_eq!(opened.balance, OPENING_BALANCE);
        assert!(opened.transactions.is_empty());
        assert!(opened.threat_logs.is_empty());
        assert_eq!(opened.email, "asha@example.com");
    }

    #[test]
    fn test_decode_remote_row() {
        let row = serde_json::json!({
            "id": 42,
            "name": "Ravi",
            "email": "ravi@example.com",
            "pin": "0007",
            "balance": 1000,
            "transactions": null
        });

        let account: Account = serde_json::from_value(row).unwrap();
        assert_eq!(account.balance, dec!(1000));
        assert!(account.transactions.is_empty());
        assert!(account.threat_logs.is_empty());
        assert!(account.password.is_none());
        assert_eq!(account.initial(), Some('R'));
    }

    #[test]
    fn test_decode_rejects_incomplete_row() {
        let row = serde_json::json!({ "email": "ghost@example.com" });
        assert!(serde_json::from_value::<Account>(row).is_err());
    }
}
