//! Display utilities for the CLI

use colored::*;
use securevault_guard::AttackType;
use securevault_sdk::{format_inr, Account, RiskLevel, RiskVerdict, ThreatLog, Transaction};

/// Print a section header
pub fn section(title: &str) {
    println!();
    println!("{}", "━".repeat(60).bright_black());
    println!(" {}", title.bright_white().bold());
    println!("{}", "━".repeat(60).bright_black());
}

/// Print a success message
pub fn success(message: &str) {
    println!("  {} {}", "✓".bright_green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    println!("  {} {}", "✗".bright_red(), message.bright_red());
}

/// Print an info message
pub fn info(message: &str) {
    println!("  {} {}", "→".bright_blue(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    println!("  {} {}", "⚠".yellow(), message.yellow());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("      {}: {}", key, value.bright_cyan());
}

/// Print a labeled value
pub fn labeled(label: &str, value: &str) {
    println!("  {}: {}", label.bright_white(), value.bright_cyan());
}

/// Account header: avatar, holder and balance
pub fn account_summary(account: &Account) {
    let avatar = account.initial().unwrap_or('?');
    println!(
        "  {} {}  {}",
        format!("[{}]", avatar).bright_yellow().bold(),
        account.name.bright_white().bold(),
        account.email.bright_black()
    );
    labeled("Balance", &format_inr(account.balance));
}

/// Newest first, at most `limit` rows
pub fn transactions(account: &Account, limit: usize) {
    if account.transactions.is_empty() {
        info("No transactions yet");
        return;
    }

    for tx in account.recent_transactions().take(limit) {
        transaction(tx);
    }

    let hidden = account.transactions.len().saturating_sub(limit);
    if hidden > 0 {
        println!("  {}", format!("… {} older", hidden).bright_black());
    }
}

fn transaction(tx: &Transaction) {
    println!(
        "  {} {:>14}  to {}  {}",
        "↑".bright_red(),
        format!("-{}", format_inr(tx.amount)).bright_white(),
        tx.to.bright_cyan(),
        tx.date.bright_black()
    );
    kv("Id", &tx.id);
    kv("Status", &tx.status.to_string());
}

fn level_colored(level: RiskLevel) -> ColoredString {
    match level {
        RiskLevel::Low => level.as_str().bright_green().bold(),
        RiskLevel::Medium => level.as_str().yellow().bold(),
        RiskLevel::High => level.as_str().bright_red().bold(),
    }
}

/// Full verdict card
pub fn verdict(verdict: &RiskVerdict) {
    println!(
        "  {} {}  {}",
        "Risk".bright_white(),
        format!("{:.0}%", verdict.risk_percentage).bright_white().bold(),
        level_colored(verdict.level)
    );
    println!();
    println!("  {}", verdict.analysis);

    if !verdict.vulnerabilities.is_empty() {
        println!();
        println!("  {}", "Red flags:".bright_white());
        for flag in &verdict.vulnerabilities {
            println!("    {} {}", "•".bright_red(), flag);
        }
    }

    if verdict.degraded {
        println!();
        warning("Classifier unavailable; this is a precautionary default");
    }
}

/// One line per past scan
pub fn threat_log(log: &ThreatLog) {
    let input: String = if log.input.chars().count() > 48 {
        let head: String = log.input.chars().take(47).collect();
        format!("{}…", head)
    } else {
        log.input.clone()
    };

    println!(
        "  {:>4}  {:<6}  {:<8}  {}",
        format!("{:.0}%", log.result.risk_percentage),
        level_colored(log.result.level),
        log.kind.to_string().bright_black(),
        input
    );
    kv("At", &log.timestamp);
}

/// Security briefing card
pub fn attack(attack: &AttackType) {
    println!();
    println!("  {}", attack.title.bright_yellow().bold());
    println!("  {}", attack.description);
    kv("Vector", attack.cause);
    kv("Countermeasure", attack.detection);
}
