//! Phishing scan command

use securevault_sdk::{ScanKind, Vault};

use crate::display;

pub async fn run(vault: &Vault, kind: ScanKind, content: &str) -> anyhow::Result<()> {
    let mut session = vault.restore().await;
    let logged_before = session.as_ref().map(|s| s.account().threat_logs.len());

    display::section(match kind {
        ScanKind::Link => "Link Analysis",
        ScanKind::Message => "Message Analysis",
    });
    display::info(&format!("Analyzing with {}", vault.analyzer().provider_name()));

    let verdict = vault.scan(session.as_mut(), kind, content).await?;
    println!();
    display::verdict(&verdict);

    println!();
    match (session, logged_before) {
        (Some(session), Some(before)) if session.account().threat_logs.len() > before => {
            display::success("Saved to your threat log")
        }
        (Some(_), _) => display::warning("Could not save this scan to your threat log"),
        (None, _) => display::info("Not logged in; this scan was not saved"),
    }
    Ok(())
}
