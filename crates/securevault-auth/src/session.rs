//! Session Management
//!
//! A session is nothing more than the active account's email, kept in a
//! small local key/value store. There is no token and no expiry: whoever
//! can read the entry is logged in, and restoring re-reads the account from
//! the remote store.

use async_trait::async_trait;
use dashmap::DashMap;
use securevault_db::AccountStore;
use securevault_types::Account;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::{SessionConfig, SESSION_KEY};
use crate::error::{AuthError, AuthResult};

/// Durable local key/value storage
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> AuthResult<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> AuthResult<()>;
    async fn remove(&self, key: &str) -> AuthResult<()>;
}

/// Session entries kept in a JSON object on disk
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash never leaves a half-written file behind.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(config: SessionConfig) -> Self {
        Self { path: config.path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> AuthResult<BTreeMap<String, String>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Entries to write back, plus whether the file must be rewritten
    ///
    /// An unparsable file counts as empty and is replaced on the next save.
    async fn load_for_write(&self) -> AuthResult<(BTreeMap<String, String>, bool)> {
        match self.load().await {
            Ok(entries) => Ok((entries, false)),
            Err(AuthError::Serialization(e)) => {
                warn!(path = %self.path.display(), error = %e, "Discarding unreadable session file");
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    async fn save(&self, entries: &BTreeMap<String, String>) -> AuthResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(entries)?).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self, key: &str) -> AuthResult<Option<String>> {
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> AuthResult<()> {
        let (mut entries, _) = self.load_for_write().await?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries).await
    }

    async fn remove(&self, key: &str) -> AuthResult<()> {
        let (mut entries, corrupt) = self.load_for_write().await?;
        if entries.remove(key).is_some() || corrupt {
            self.save(&entries).await?;
        }
        Ok(())
    }
}

/// Session entries held in memory
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: DashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, key: &str) -> AuthResult<Option<String>> {
        Ok(self.entries.get(key).map(|v| v.clone()))
    }

    async fn set(&self, key: &str, value: &str) -> AuthResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AuthResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Persists and resolves the logged-in account
#[derive(Clone)]
pub struct SessionManager {
    accounts: Arc<dyn AccountStore>,
    store: Arc<dyn SessionStore>,
}

impl SessionManager {
    pub fn new(accounts: Arc<dyn AccountStore>, store: Arc<dyn SessionStore>) -> Self {
        Self { accounts, store }
    }

    /// Resolve the persisted email back into an account
    ///
    /// Absent when nothing is persisted, when the email no longer resolves,
    /// or when either lookup fails.
    pub async fn restore(&self) -> Option<Account> {
        let email = match self.store.get(SESSION_KEY).await {
            Ok(Some(email)) => email,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Could not read persisted session");
                return None;
            }
        };

        match self.accounts.find_by_email(&email).await {
            Ok(Some(account)) => {
                debug!(email = %email, "Session restored");
                Some(account)
            }
            Ok(None) => {
                debug!(email = %email, "Persisted session has no matching account");
                None
            }
            Err(e) => {
                warn!(email = %email, error = %e, "Could not resolve persisted session");
                None
            }
        }
    }

    /// Remember `account` as the logged-in account
    pub async fn start(&self, account: &Account) -> AuthResult<()> {
        self.store.set(SESSION_KEY, &account.email).await?;
        info!(email = %account.email, "Session started");
        Ok(())
    }

    /// Forget the logged-in account
    pub async fn end(&self) -> AuthResult<()> {
        self.store.remove(SESSION_KEY).await?;
        info!("Session ended");
        Ok(())
    }
}
