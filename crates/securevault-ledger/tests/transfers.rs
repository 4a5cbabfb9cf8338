//! Transfer authorization against in-memory and failing stores

use async_trait::async_trait;
use rust_decimal_macros::dec;
use securevault_db::{AccountStore, AccountUpdate, DbError, DbResult, MemoryAccountStore};
use securevault_ledger::{LedgerConfig, LedgerError, TransferAuthorizer};
use securevault_types::{Account, TransactionStatus, TRANSACTION_ID_LEN};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

async fn setup() -> (Arc<MemoryAccountStore>, TransferAuthorizer, Account) {
    let store = Arc::new(MemoryAccountStore::new());
    let account = store
        .insert(&Account::candidate("Arjun", "arjun@example.com", "4455", "pw"))
        .await
        .unwrap();
    let ledger = TransferAuthorizer::new(
        store.clone(),
        LedgerConfig::default().with_minimum_reserve(dec!(500)),
    );
    (store, ledger, account)
}

#[tokio::test]
async fn test_transfer_down_to_reserve_is_accepted() {
    let (store, ledger, account) = setup().await;

    let updated = ledger.authorize(&account, dec!(500), "9876543210").await.unwrap();
    assert_eq!(updated.balance, dec!(500));
    assert_eq!(updated.transactions.len(), 1);

    let tx = &updated.transactions[0];
    assert_eq!(tx.to, "9876543210");
    assert_eq!(tx.amount, dec!(500));
    assert_eq!(tx.status, TransactionStatus::Completed);
    assert_eq!(tx.id.len(), TRANSACTION_ID_LEN);

    let stored = store.find_by_email("arjun@example.com").await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_transfer_past_reserve_changes_nothing() {
    let (store, ledger, account) = setup().await;

    let err = ledger.authorize(&account, dec!(501), "9876543210").await.unwrap_err();
    assert!(matches!(err, LedgerError::InsufficientReserve { .. }));

    let stored = store.find_by_email("arjun@example.com").await.unwrap().unwrap();
    assert_eq!(stored.balance, dec!(1000));
    assert!(stored.transactions.is_empty());
}

#[tokio::test]
async fn test_sequential_transfers_keep_order() {
    let (_, ledger, mut account) = setup().await;
    let recipients = ["1111111111", "2222222222", "3333333333", "4444444444"];

    for to in recipients {
        account = ledger.authorize(&account, dec!(100), to).await.unwrap();
    }

    assert_eq!(account.balance, dec!(600));
    let sent: Vec<&str> = account.transactions.iter().map(|t| t.to.as_str()).collect();
    assert_eq!(sent, recipients);

    let newest: Vec<&str> = account.recent_transactions().map(|t| t.to.as_str()).collect();
    assert_eq!(newest.first(), Some(&"4444444444"));
}

#[tokio::test]
async fn test_stale_view_is_conflict() {
    let (store, ledger, account) = setup().await;

    ledger.authorize(&account, dec!(100), "1111111111").await.unwrap();
    let err = ledger.authorize(&account, dec!(100), "2222222222").await.unwrap_err();

    assert!(matches!(err, LedgerError::Store(DbError::Conflict(_))));
    let stored = store.find_by_email("arjun@example.com").await.unwrap().unwrap();
    assert_eq!(stored.balance, dec!(900));
    assert_eq!(stored.transactions.len(), 1);
}

#[tokio::test]
async fn test_invalid_input_rejected_before_store() {
    let store = Arc::new(CountingStore::default());
    let ledger = TransferAuthorizer::new(store.clone(), LedgerConfig::default());
    let account = Account::candidate("Arjun", "arjun@example.com", "4455", "pw");

    for (amount, to) in [(dec!(0), "123"), (dec!(-5), "123"), (dec!(10), ""), (dec!(10), "12ab")] {
        let err = ledger.authorize(&account, amount, to).await.unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)), "{} -> {}", amount, to);
    }
    assert_eq!(store.updates.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_store_failure_surfaces_unchanged() {
    let store = Arc::new(CountingStore::default());
    let ledger = TransferAuthorizer::new(store.clone(), LedgerConfig::default());
    let account = Account::candidate("Arjun", "arjun@example.com", "4455", "pw");

    let err = ledger.authorize(&account, dec!(10), "123").await.unwrap_err();
    assert!(matches!(err, LedgerError::Store(DbError::Connection(_))));
    assert_eq!(store.updates.load(Ordering::SeqCst), 1);
}

/// Store whose writes always fail with a transport error
#[derive(Default)]
struct CountingStore {
    updates: AtomicUsize,
}

#[async_trait]
impl AccountStore for CountingStore {
    async fn find_by_email(&self, _email: &str) -> DbResult<Option<Account>> {
        Ok(None)
    }

    async fn find_by_credentials(&self, _email: &str, _pin: &str) -> DbResult<Option<Account>> {
        Ok(None)
    }

    async fn insert(&self, candidate: &Account) -> DbResult<Account> {
        Ok(candidate.opening())
    }

    async fn apply_update(&self, _email: &str, _update: &AccountUpdate) -> DbResult<Account> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        Err(DbError::Connection("connection reset".to_string()))
    }
}
