//! Transfer command

use securevault_ledger::LedgerError;
use securevault_sdk::{format_inr, parse_amount, Vault, VaultError};

use crate::display;

const FORM_ERROR: &str = "Please enter a valid mobile number and amount.";

pub async fn run(vault: &Vault, to: &str, amount: &str) -> anyhow::Result<()> {
    let mut session = vault.require_session().await?;

    display::section("Send Money");

    let amount = parse_amount(amount).map_err(|_| anyhow::anyhow!(FORM_ERROR))?;
    display::kv("To", to);
    display::kv("Amount", &format_inr(amount));

    let account = match vault.transfer(&mut session, amount, to).await {
        Ok(account) => account,
        Err(e) => return Err(explain(e)),
    };

    display::success("Transfer completed");
    if let Some(tx) = account.recent_transactions().next() {
        display::kv("Transaction", &tx.id);
        display::kv("Date", &tx.date);
    }
    display::labeled("New balance", &format_inr(account.balance));
    Ok(())
}

/// Turn a rejected transfer into the message the user sees
fn explain(error: VaultError) -> anyhow::Error {
    match error {
        VaultError::Ledger(LedgerError::InsufficientReserve { reserve, .. }) => anyhow::anyhow!(
            "Transaction declined. A minimum balance of {} must be maintained in your vault.",
            format_inr(reserve)
        ),
        VaultError::Ledger(LedgerError::Validation(_)) => anyhow::anyhow!(FORM_ERROR),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reserve_rejection_message() {
        let err = explain(VaultError::Ledger(LedgerError::InsufficientReserve {
            balance: dec!(1000),
            amount: dec!(600),
            reserve: dec!(500),
        }));
        assert_eq!(
            err.to_string(),
            "Transaction declined. A minimum balance of ₹500.00 must be maintained in your vault."
        );
    }

    #[test]
    fn test_validation_uses_form_message() {
        let err = explain(VaultError::Ledger(LedgerError::Validation(
            "recipient must be digits".to_string(),
        )));
        assert_eq!(err.to_string(), FORM_ERROR);
    }
}
