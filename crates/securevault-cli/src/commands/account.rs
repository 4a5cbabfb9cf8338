//! Account commands: register, login, logout, status, threats

use anyhow::Context;
use rust_decimal::Decimal;
use securevault_sdk::{format_inr, Vault};

use crate::{display, input};

pub async fn register(
    vault: &Vault,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    pin: Option<String>,
) -> anyhow::Result<()> {
    display::section("Open Account");

    let name = input::text("Full name", name)?;
    let email = input::text("Email", email)?;
    let password = input::password(password)?;
    let pin = input::pin(pin, true)?;

    let session = vault
        .register(&name, &email, &pin, &password)
        .await
        .context("Registration error")?;

    display::success("Vault opened");
    display::account_summary(session.account());
    display::info(&format!(
        "Opening credit of {} applied; you are now logged in",
        format_inr(session.account().balance)
    ));
    Ok(())
}

pub async fn login(vault: &Vault, email: Option<String>, pin: Option<String>) -> anyhow::Result<()> {
    display::section("Login");

    let email = input::text("Email", email)?;
    let pin = input::pin(pin, false)?;

    let session = vault.login(&email, &pin).await?;

    display::success("Identity verified");
    display::account_summary(session.account());
    Ok(())
}

pub async fn logout(vault: &Vault) -> anyhow::Result<()> {
    let current = vault.restore().await;
    vault.logout().await?;

    match current {
        Some(session) => display::success(&format!("Logged out of {}", session.email())),
        None => display::info("No active session; local session cleared"),
    }
    Ok(())
}

pub async fn status(vault: &Vault, limit: usize) -> anyhow::Result<()> {
    let session = vault.require_session().await?;
    let account = session.account();

    display::section("Dashboard");
    display::account_summary(account);
    display::labeled(
        "Available to send",
        &format_inr((account.balance - vault.ledger_config().minimum_reserve).max(Decimal::ZERO)),
    );

    display::section("Recent Transactions");
    display::transactions(account, limit);

    if !account.threat_logs.is_empty() {
        println!();
        display::info(&format!(
            "{} past scan(s); run `securevault threats` to list them",
            account.threat_logs.len()
        ));
    }
    Ok(())
}

pub async fn threats(vault: &Vault, limit: usize) -> anyhow::Result<()> {
    let session = vault.require_session().await?;
    let logs = &session.account().threat_logs;

    display::section("Threat Log");
    if logs.is_empty() {
        display::info("No scans yet");
        return Ok(());
    }

    for log in logs.iter().rev().take(limit) {
        display::threat_log(log);
    }
    Ok(())
}
