//! SecureVault SDK - one handle over the whole client
//!
//! [`Vault`] wires the account store, session persistence, the transfer
//! authorizer and the threat analyzer together. Every operation that acts
//! for a logged-in user takes an explicit [`VaultSession`]; there is no
//! ambient "current user".
//!
//! # Quick Start
//!
//! ```ignore
//! use securevault_sdk::{ScanKind, Vault};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let vault = Vault::from_env()?;
//!
//!     let mut session = vault
//!         .register("Asha", "asha@example.com", "1234", "correct horse")
//!         .await?;
//!
//!     vault.transfer(&mut session, 250.into(), "9876543210").await?;
//!
//!     let verdict = vault
//!         .scan(Some(&mut session), ScanKind::Link, "http://sbi-kyc.top")
//!         .await?;
//!     println!("{}% {}", verdict.risk_percentage, verdict.level);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Consistency
//!
//! The session's account is only ever replaced by a row the store returned.
//! A failed write leaves it exactly as it was.

pub use securevault_types::*;

use securevault_auth::{
    validate_login, validate_registration, AuthError, FileSessionStore, MemorySessionStore,
    SessionConfig, SessionManager, SessionStore,
};
use securevault_db::{
    AccountStore, AccountUpdate, DbError, MemoryAccountStore, RestAccountStore, StoreConfig,
};
use securevault_guard::ThreatAnalyzer;
use securevault_ledger::{LedgerConfig, LedgerError, TransferAuthorizer};
use securevault_llm::{LLMProvider, LLMRouter};
use std::sync::Arc;
use tracing::{info, warn};

// ============================================================================
// Error Types
// ============================================================================

/// Errors surfaced by [`Vault`] operations
#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    /// Login matched no account; wrong PIN and unknown email look the same
    #[error("Verification Failed. Cryptographic Access Blocked for this Identity.")]
    InvalidCredentials,

    #[error("Not logged in")]
    NotAuthenticated,

    /// Input rejected before any remote call
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] DbError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// SDK Result type
pub type VaultResult<T> = std::result::Result<T, VaultError>;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for every layer the vault owns
#[derive(Debug, Clone, Default)]
pub struct VaultConfig {
    pub store: StoreConfig,
    pub session: SessionConfig,
    pub ledger: LedgerConfig,
}

impl VaultConfig {
    /// Create config from environment variables, loading `.env` first
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::default()
    }
}

// ============================================================================
// Session
// ============================================================================

/// The logged-in account, as last returned by the store
#[derive(Debug, Clone, PartialEq)]
pub struct VaultSession {
    account: Account,
}

impl VaultSession {
    fn new(account: Account) -> Self {
        Self { account }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn email(&self) -> &str {
        &self.account.email
    }
}

// ============================================================================
// Vault
// ============================================================================

/// High-level client over the account store and the threat analyzer
#[derive(Clone)]
pub struct Vault {
    store: Arc<dyn AccountStore>,
    sessions: SessionManager,
    authorizer: TransferAuthorizer,
    analyzer: ThreatAnalyzer,
}

impl Vault {
    /// Assemble a vault from its parts
    pub fn new(
        store: Arc<dyn AccountStore>,
        session_store: Arc<dyn SessionStore>,
        analyzer: ThreatAnalyzer,
        ledger: LedgerConfig,
    ) -> Self {
        Self {
            sessions: SessionManager::new(store.clone(), session_store),
            authorizer: TransferAuthorizer::new(store.clone(), ledger),
            store,
            analyzer,
        }
    }

    /// Remote store, file-backed session and the environment's LLM provider
    pub fn from_env() -> VaultResult<Self> {
        Self::from_config(VaultConfig::from_env(), &LLMRouter::from_env())
    }

    pub fn from_config(config: VaultConfig, router: &LLMRouter) -> VaultResult<Self> {
        let store = RestAccountStore::new(config.store)?;
        Ok(Self::new(
            Arc::new(store),
            Arc::new(FileSessionStore::new(config.session)),
            ThreatAnalyzer::from_router(router),
            config.ledger,
        ))
    }

    /// Everything in process: memory store, memory session, given provider
    pub fn in_memory(provider: Arc<dyn LLMProvider>) -> Self {
        Self::new(
            Arc::new(MemoryAccountStore::new()),
            Arc::new(MemorySessionStore::new()),
            ThreatAnalyzer::new(provider),
            LedgerConfig::default(),
        )
    }

    pub fn store(&self) -> &Arc<dyn AccountStore> {
        &self.store
    }

    pub fn analyzer(&self) -> &ThreatAnalyzer {
        &self.analyzer
    }

    pub fn ledger_config(&self) -> &LedgerConfig {
        self.authorizer.config()
    }

    /// Open a new account with the opening balance and log into it
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        pin: &str,
        password: &str,
    ) -> VaultResult<VaultSession> {
        validate_registration(name, email, pin, password)?;

        let candidate = Account::candidate(name, email, pin, password);
        let account = self.store.insert(&candidate).await?;
        info!(email = %account.email, "Account registered");

        self.remember(&account).await;
        Ok(VaultSession::new(account))
    }

    /// Log in with email and PIN
    pub async fn login(&self, email: &str, pin: &str) -> VaultResult<VaultSession> {
        validate_login(email, pin)?;

        let account = self
            .store
            .find_by_credentials(email, pin)
            .await?
            .ok_or(VaultError::InvalidCredentials)?;
        info!(email = %account.email, "Login succeeded");

        self.remember(&account).await;
        Ok(VaultSession::new(account))
    }

    /// Persist the session; the account is usable even if this fails
    async fn remember(&self, account: &Account) {
        if let Err(e) = self.sessions.start(account).await {
            warn!(email = %account.email, error = %e, "Could not persist session");
        }
    }

    /// Pick up the session persisted by an earlier login, if any
    pub async fn restore(&self) -> Option<VaultSession> {
        self.sessions.restore().await.map(VaultSession::new)
    }

    /// Like [`Vault::restore`], but an absent session is an error
    pub async fn require_session(&self) -> VaultResult<VaultSession> {
        self.restore().await.ok_or(VaultError::NotAuthenticated)
    }

    /// Forget the persisted session, whether or not it still resolves
    pub async fn logout(&self) -> VaultResult<()> {
        self.sessions.end().await?;
        Ok(())
    }

    /// Re-read the session's account from the store
    pub async fn refresh(&self, session: &mut VaultSession) -> VaultResult<()> {
        let account = self
            .store
            .find_by_email(session.email())
            .await?
            .ok_or_else(|| DbError::NotFound(format!("account {}", session.email())))?;
        session.account = account;
        Ok(())
    }

    /// Send `amount` to `recipient` from the session's account
    ///
    /// On success the session holds the row the store returned; on failure
    /// it is left untouched.
    pub async fn transfer<'a>(
        &self,
        session: &'a mut VaultSession,
        amount: Decimal,
        recipient: &str,
    ) -> VaultResult<&'a Account> {
        let updated = self
            .authorizer
            .authorize(&session.account, amount, recipient)
            .await?;
        session.account = updated;
        Ok(&session.account)
    }

    /// Score a link or message; log the result to the account when logged in
    ///
    /// The verdict is returned even if saving the log fails.
    pub async fn scan(
        &self,
        session: Option<&mut VaultSession>,
        kind: ScanKind,
        content: &str,
    ) -> VaultResult<RiskVerdict> {
        if content.trim().is_empty() {
            return Err(VaultError::Validation(match kind {
                ScanKind::Link => "Enter a URL to scan".to_string(),
                ScanKind::Message => "Enter a message to scan".to_string(),
            }));
        }

        let verdict = self.analyzer.analyze(kind, content).await;

        if let Some(session) = session {
            let log = ThreatLog::record(kind, content, verdict.clone());
            if let Err(e) = self.save_threat_log(session, log).await {
                warn!(email = %session.email(), error = %e, "Could not save threat log");
            }
        }

        Ok(verdict)
    }

    async fn save_threat_log(&self, session: &mut VaultSession, log: ThreatLog) -> VaultResult<()> {
        let mut logs = session.account.threat_logs.clone();
        logs.push(log);

        let updated = self
            .store
            .apply_update(session.email(), &AccountUpdate::new().with_threat_logs(logs))
            .await?;
        session.account = updated;
        Ok(())
    }
}
