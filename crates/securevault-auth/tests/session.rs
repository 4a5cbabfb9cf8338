//! Session persistence and restore

use securevault_auth::{
    FileSessionStore, MemorySessionStore, SessionConfig, SessionManager, SessionStore, SESSION_KEY,
};
use securevault_db::{AccountStore, MemoryAccountStore};
use securevault_types::Account;
use std::sync::Arc;

async fn seeded_accounts() -> (Arc<MemoryAccountStore>, Account) {
    let accounts = Arc::new(MemoryAccountStore::new());
    let account = accounts
        .insert(&Account::candidate("Devi", "devi@example.com", "8080", "pw"))
        .await
        .unwrap();
    (accounts, account)
}

#[tokio::test]
async fn test_restore_twice_yields_same_account() {
    let (accounts, account) = seeded_accounts().await;
    let sessions = SessionManager::new(accounts, Arc::new(MemorySessionStore::new()));

    sessions.start(&account).await.unwrap();

    let first = sessions.restore().await.unwrap();
    let second = sessions.restore().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.email, "devi@example.com");
}

#[tokio::test]
async fn test_restore_without_session_is_none() {
    let (accounts, _) = seeded_accounts().await;
    let sessions = SessionManager::new(accounts, Arc::new(MemorySessionStore::new()));

    assert!(sessions.restore().await.is_none());
}

#[tokio::test]
async fn test_end_clears_session() {
    let (accounts, account) = seeded_accounts().await;
    let sessions = SessionManager::new(accounts, Arc::new(MemorySessionStore::new()));

    sessions.start(&account).await.unwrap();
    sessions.end().await.unwrap();

    assert!(sessions.restore().await.is_none());
}

#[tokio::test]
async fn test_unknown_persisted_email_is_none() {
    let (accounts, _) = seeded_accounts().await;
    let store = Arc::new(MemorySessionStore::new());
    store.set(SESSION_KEY, "gone@example.com").await.unwrap();

    let sessions = SessionManager::new(accounts, store);
    assert!(sessions.restore().await.is_none());
}

#[tokio::test]
async fn test_file_store_survives_new_instance() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("session.json");
    let (accounts, account) = seeded_accounts().await;

    let first = SessionManager::new(
        accounts.clone(),
        Arc::new(FileSessionStore::new(SessionConfig::at(&path))),
    );
    first.start(&account).await.unwrap();
    assert!(path.exists());

    let second = SessionManager::new(
        accounts,
        Arc::new(FileSessionStore::new(SessionConfig::at(&path))),
    );
    let restored = second.restore().await.unwrap();
    assert_eq!(restored.email, account.email);
}

#[tokio::test]
async fn test_file_store_keeps_other_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(SessionConfig::at(dir.path().join("session.json")));

    store.set("theme", "dark").await.unwrap();
    store.set(SESSION_KEY, "devi@example.com").await.unwrap();
    store.remove(SESSION_KEY).await.unwrap();

    assert_eq!(store.get("theme").await.unwrap().as_deref(), Some("dark"));
    assert_eq!(store.get(SESSION_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn test_corrupt_session_file_restores_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, b"{not json").unwrap();

    let (accounts, _) = seeded_accounts().await;
    let sessions = SessionManager::new(
        accounts,
        Arc::new(FileSessionStore::new(SessionConfig::at(&path))),
    );

    assert!(sessions.restore().await.is_none());
}

#[tokio::test]
async fn test_corrupt_session_file_is_overwritten_on_start() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, b"{not json").unwrap();

    let (accounts, account) = seeded_accounts().await;
    let sessions = SessionManager::new(
        accounts,
        Arc::new(FileSessionStore::new(SessionConfig::at(&path))),
    );

    sessions.start(&account).await.unwrap();
    assert_eq!(sessions.restore().await.unwrap().email, account.email);
}

#[tokio::test]
async fn test_end_clears_corrupt_session_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, b"{not json").unwrap();
    let store = FileSessionStore::new(SessionConfig::at(&path));

    store.remove(SESSION_KEY).await.unwrap();

    assert_eq!(store.get(SESSION_KEY).await.unwrap(), None);
}
