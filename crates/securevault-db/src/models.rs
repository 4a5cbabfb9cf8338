//! Write models for the accounts collection

use rust_decimal::Decimal;
use securevault_types::{Account, ThreatLog, Transaction};
use serde::Serialize;

/// Partial update merged into an existing account row
///
/// Only the fields that are `Some` are sent. `expected_balance` is not a
/// column: it turns the update into update-if-balance-matches.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountUpdate {
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub balance: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<Transaction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threat_logs: Option<Vec<ThreatLog>>,
    #[serde(skip)]
    pub expected_balance: Option<Decimal>,
}

impl AccountUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = Some(balance);
        self
    }

    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = Some(transactions);
        self
    }

    pub fn with_threat_logs(mut self, threat_logs: Vec<ThreatLog>) -> Self {
        self.threat_logs = Some(threat_logs);
        self
    }

    /// Only apply if the stored balance still equals `balance`
    pub fn guarded_by(mut self, balance: Decimal) -> Self {
        self.expected_balance = Some(balance);
        self
    }

    /// True when no column would change
    pub fn is_empty(&self) -> bool {
        self.balance.is_none() && self.transactions.is_none() && self.threat_logs.is_none()
    }

    /// Merge into an in-memory row
    pub fn apply_to(&self, account: &mut Account) {
        if let Some(balance) = self.balance {
            account.balance = balance;
        }
        if let Some(ref transactions) = self.transactions {
            account.transactions = transactions.clone();
        }
        if let Some(ref threat_logs) = self.threat_logs {
            account.threat_logs = threat_logs.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_only_present_fields_are_sent() {
        let update = AccountUpdate::new().with_balance(dec!(750)).guarded_by(dec!(1000));
        let json = serde_json::to_value(&update).unwrap();

        assert_eq!(json["balance"].as_f64(), Some(750.0));
        assert!(json.get("transactions").is_none());
        assert!(json.get("threat_logs").is_none());
        assert!(json.get("expected_balance").is_none());
    }

    #[test]
    fn test_apply_to_leaves_absent_fields() {
        let mut account = Account::candidate("Meera", "meera@example.com", "1111", "pw");
        AccountUpdate::new().with_balance(dec!(600)).apply_to(&mut account);

        assert_eq!(account.balance, dec!(600));
        assert_eq!(account.name, "Meera");
        assert!(AccountUpdate::new().is_empty());
    }
}
