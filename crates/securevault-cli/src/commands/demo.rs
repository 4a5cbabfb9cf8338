//! In-memory walkthrough of the full flow

use std::sync::Arc;

use rust_decimal::Decimal;
use securevault_llm::DeterministicProvider;
use securevault_sdk::{format_inr, ScanKind, Vault};

use crate::display;

pub async fn run() -> anyhow::Result<()> {
    let vault = Vault::in_memory(Arc::new(DeterministicProvider::new()));

    display::section("Demo: Open Account");
    let mut session = vault
        .register("Demo User", "demo@securevault.local", "1234", "demo-password")
        .await?;
    display::success("Registered demo@securevault.local");
    display::account_summary(session.account());

    display::section("Demo: Transfers");
    let account = vault
        .transfer(&mut session, Decimal::from(250), "9876543210")
        .await?;
    display::success(&format!(
        "Sent {} to 9876543210, balance now {}",
        format_inr(Decimal::from(250)),
        format_inr(account.balance)
    ));

    match vault
        .transfer(&mut session, Decimal::from(400), "9123456780")
        .await
    {
        Ok(_) => display::warning("Transfer of ₹400.00 unexpectedly went through"),
        Err(e) => display::error(&format!("Declined: {}", e)),
    }
    display::labeled("Balance", &format_inr(session.account().balance));

    display::section("Demo: Phishing Scan");
    let verdict = vault
        .scan(
            Some(&mut session),
            ScanKind::Message,
            "Dear customer, your KYC has expired. Share the OTP sent to you to avoid account block.",
        )
        .await?;
    display::verdict(&verdict);

    display::section("Demo: Dashboard");
    display::account_summary(session.account());
    display::transactions(session.account(), 10);

    display::section("Demo: Threat Log");
    for log in session.account().threat_logs.iter().rev() {
        display::threat_log(log);
    }

    println!();
    display::info("Nothing was sent anywhere; set SECUREVAULT_STORE_URL, SECUREVAULT_STORE_KEY and GEMINI_API_KEY to go live");
    Ok(())
}
