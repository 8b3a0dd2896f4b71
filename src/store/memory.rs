//! In-memory port doubles for tests.
//!
//! Identity assignment mirrors the real backend: a counter that never reuses
//! an id, even after deletes.

use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::models::{Account, Message};
use crate::store::{AccountStore, MessageStore, StoreError};

#[derive(Default)]
pub struct MemoryAccountStore {
    next_id: AtomicI64,
    rows: Mutex<Vec<Account>>,
}

impl MemoryAccountStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AccountStore for MemoryAccountStore {
    async fn get_by_id(&self, id: i64) -> Result<Option<Account>, StoreError> {
        let rows = self.rows.lock().expect("account store poisoned");
        Ok(rows.iter().find(|a| a.account_id == id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<Account>, StoreError> {
        let rows = self.rows.lock().expect("account store poisoned");
        Ok(rows.iter().find(|a| a.username == username).cloned())
    }

    async fn insert(&self, account: &Account) -> Result<Account, StoreError> {
        let account_id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Account { account_id, ..account.clone() };
        let mut rows = self.rows.lock().expect("account store poisoned");
        rows.push(stored.clone());
        Ok(stored)
    }
}

#[derive(Default)]
pub struct MemoryMessageStore {
    next_id: AtomicI64,
    rows: Mutex<Vec<Message>>,
}

impl MemoryMessageStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl MessageStore for MemoryMessageStore {
    async fn get_by_id(&self, id: i64) -> Result<Option<Message>, StoreError> {
        let rows = self.rows.lock().expect("message store poisoned");
        Ok(rows.iter().find(|m| m.message_id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Message>, StoreError> {
        let rows = self.rows.lock().expect("message store poisoned");
        Ok(rows.clone())
    }

    async fn insert(&self, message: &Message) -> Result<Message, StoreError> {
        let message_id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Message { message_id, ..message.clone() };
        let mut rows = self.rows.lock().expect("message store poisoned");
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, message: &Message) -> Result<bool, StoreError> {
        let mut rows = self.rows.lock().expect("message store poisoned");
        match rows.iter_mut().find(|m| m.message_id == message.message_id) {
            Some(row) => {
                *row = message.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, message: &Message) -> Result<bool, StoreError> {
        let mut rows = self.rows.lock().expect("message store poisoned");
        let before = rows.len();
        rows.retain(|m| m.message_id != message.message_id);
        Ok(rows.len() < before)
    }

    async fn get_by_account_id(&self, account_id: i64) -> Result<Vec<Message>, StoreError> {
        let rows = self.rows.lock().expect("message store poisoned");
        Ok(rows.iter().filter(|m| m.posted_by == account_id).cloned().collect())
    }
}

fn unavailable() -> StoreError {
    StoreError::Database(sqlx::Error::PoolClosed)
}

/// Port double whose every operation fails, for exercising the uniform
/// access-failure rewrap in the services.
pub struct FailingAccountStore;

#[async_trait::async_trait]
impl AccountStore for FailingAccountStore {
    async fn get_by_id(&self, _id: i64) -> Result<Option<Account>, StoreError> {
        Err(unavailable())
    }

    async fn get_by_username(&self, _username: &str) -> Result<Option<Account>, StoreError> {
        Err(unavailable())
    }

    async fn insert(&self, _account: &Account) -> Result<Account, StoreError> {
        Err(unavailable())
    }
}

/// Message-side counterpart of [`FailingAccountStore`].
pub struct FailingMessageStore;

#[async_trait::async_trait]
impl MessageStore for FailingMessageStore {
    async fn get_by_id(&self, _id: i64) -> Result<Option<Message>, StoreError> {
        Err(unavailable())
    }

    async fn get_all(&self) -> Result<Vec<Message>, StoreError> {
        Err(unavailable())
    }

    async fn insert(&self, _message: &Message) -> Result<Message, StoreError> {
        Err(unavailable())
    }

    async fn update(&self, _message: &Message) -> Result<bool, StoreError> {
        Err(unavailable())
    }

    async fn delete(&self, _message: &Message) -> Result<bool, StoreError> {
        Err(unavailable())
    }

    async fn get_by_account_id(&self, _account_id: i64) -> Result<Vec<Message>, StoreError> {
        Err(unavailable())
    }
}
