//! In-process account store

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use securevault_types::Account;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{DbError, DbResult};
use crate::models::AccountUpdate;
use crate::AccountStore;

/// Account store held in memory, keyed by email
///
/// Mirrors the remote store's contract, including opening-state inserts,
/// duplicate detection and guarded updates.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    rows: DashMap<String, Account>,
    next_id: AtomicU64,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_by_email(&self, email: &str) -> DbResult<Option<Account>> {
        Ok(self.rows.get(email).map(|row| row.clone()))
    }

    async fn find_by_credentials(&self, email: &str, pin: &str) -> DbResult<Option<Account>> {
        Ok(self
            .rows
            .get(email)
            .filter(|row| row.pin == pin)
            .map(|row| row.clone()))
    }

    async fn insert(&self, candidate: &Account) -> DbResult<Account> {
        match self.rows.entry(candidate.email.clone()) {
            Entry::Occupied(_) => Err(DbError::Duplicate(format!(
                "duplicate key value violates unique constraint: email {}",
                candidate.email
            ))),
            Entry::Vacant(slot) => {
                let mut row = candidate.opening();
                let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
                row.id = Some(serde_json::Value::from(id));
                slot.insert(row.clone());
                Ok(row)
            }
        }
    }

    async fn apply_update(&self, email: &str, update: &AccountUpdate) -> DbResult<Account> {
        if update.is_empty() {
            return Err(DbError::InvalidInput("update changes no columns".to_string()));
        }

        let mut row = self
            .rows
            .get_mut(email)
            .ok_or_else(|| DbError::NotFound(format!("account {}", email)))?;

        if let Some(expected) = update.expected_balance {
            if row.balance != expected {
                return Err(DbError::Conflict(format!(
                    "balance of {} changed since it was read",
                    email
                )));
            }
        }

        update.apply_to(&mut row);
        Ok(row.clone())
    }
}
