//! SecureVault CLI - Command-line interface for the SecureVault client
//!
//! Talks to the hosted accounts store and the Gemini classifier configured
//! in the environment (or a `.env` file). The `demo` command needs neither:
//! it runs the whole flow in memory.
//!
//! # Quick Start
//!
//! ```bash
//! securevault register
//! securevault status
//! securevault transfer --to 9876543210 --amount 250
//! securevault scan link "http://sbi-kyc-update.top/login"
//! securevault scan message "Your account is blocked. Share OTP to unblock."
//! securevault tips
//! ```

use clap::{Parser, Subcommand};
use colored::*;
use securevault_sdk::{ScanKind, Vault};

mod commands;
mod display;
mod input;

use commands::{account, demo, scan, tips, transfer};

/// SecureVault CLI - digital banking with built-in phishing defence
#[derive(Parser)]
#[command(name = "securevault")]
#[command(author = "SecureVault Contributors")]
#[command(version)]
#[command(about = "Digital banking client with AI phishing analysis", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Show informational logs (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a new account and log into it
    Register {
        /// Full name
        #[arg(long)]
        name: Option<String>,

        /// Email address (the account key)
        #[arg(long)]
        email: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,

        /// 4-digit PIN (prompted when omitted)
        #[arg(long)]
        pin: Option<String>,
    },

    /// Log in with email and PIN
    Login {
        /// Registered email address
        #[arg(long)]
        email: Option<String>,

        /// 4-digit PIN (prompted when omitted)
        #[arg(long)]
        pin: Option<String>,
    },

    /// Log out of this device
    Logout,

    /// Show balance and recent transactions
    Status {
        /// Number of transactions to list
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Send money to a mobile number
    Transfer {
        /// Recipient mobile number
        #[arg(long)]
        to: String,

        /// Amount in rupees
        #[arg(long)]
        amount: String,
    },

    /// Check a link or message for phishing
    Scan {
        #[command(subcommand)]
        target: ScanCommands,
    },

    /// List past phishing scans
    Threats {
        /// Number of scans to list
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Security briefings on common attacks
    Tips,

    /// Walk through the whole flow in memory, no remote services needed
    Demo,
}

#[derive(Subcommand)]
enum ScanCommands {
    /// Check a URL
    Link {
        /// URL to analyze
        url: String,
    },

    /// Check an SMS or email body
    Message {
        /// Message text (quote it, or pass it as several words)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    print_banner();

    let result = match cli.command {
        Commands::Tips => {
            tips::show();
            Ok(())
        }
        Commands::Demo => demo::run().await,
        command => match connect() {
            Ok(vault) => dispatch(&vault, command).await,
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        display::error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

async fn dispatch(vault: &Vault, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Register {
            name,
            email,
            password,
            pin,
        } => account::register(vault, name, email, password, pin).await,
        Commands::Login { email, pin } => account::login(vault, email, pin).await,
        Commands::Logout => account::logout(vault).await,
        Commands::Status { limit } => account::status(vault, limit).await,
        Commands::Threats { limit } => account::threats(vault, limit).await,
        Commands::Transfer { to, amount } => transfer::run(vault, &to, &amount).await,
        Commands::Scan { target } => match target {
            ScanCommands::Link { url } => scan::run(vault, ScanKind::Link, &url).await,
            ScanCommands::Message { text } => {
                scan::run(vault, ScanKind::Message, &text.join(" ")).await
            }
        },
        Commands::Tips | Commands::Demo => Ok(()),
    }
}

fn connect() -> anyhow::Result<Vault> {
    let vault = Vault::from_env()?;
    tracing::debug!(
        provider = vault.analyzer().provider_name(),
        "Vault ready"
    );
    Ok(vault)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

fn print_banner() {
    println!();
    println!("{}", "╔══════════════════════════════════════════════════════════╗".bright_yellow());
    println!(
        "{}{}{}",
        "║  ".bright_yellow(),
        "SecureVault".bright_white().bold(),
        " - Digital Banking with AI Phishing Defence    ║".bright_yellow()
    );
    println!("{}", "╚══════════════════════════════════════════════════════════╝".bright_yellow());
}
