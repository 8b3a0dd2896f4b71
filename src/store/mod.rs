//! Persistence ports.
//!
//! ARCHITECTURE
//! ============
//! Services depend on these traits, never on a concrete backend. The traits
//! are injected at service construction as `Arc<dyn _>`, so unit tests swap
//! in the in-memory doubles from `memory` while production wires the
//! Postgres stores from `postgres`.
//!
//! Absence is an explicit `Option`, never a sentinel row. `update`/`delete`
//! report whether a row was affected; interpreting "no row" is the service
//! layer's job.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use crate::models::{Account, Message};

/// Fault raised by any port operation. Services rewrap this uniformly so
/// callers can tell infrastructure trouble from semantic rejection.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage contract for accounts.
///
/// Accounts are created once and never updated or deleted, so the port
/// carries only the lookups registration and login need.
#[async_trait::async_trait]
pub trait AccountStore: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<Option<Account>, StoreError>;

    async fn get_by_username(&self, username: &str) -> Result<Option<Account>, StoreError>;

    /// Insert a new account and return it with its assigned identity.
    async fn insert(&self, account: &Account) -> Result<Account, StoreError>;
}

/// Storage contract for messages.
#[async_trait::async_trait]
pub trait MessageStore: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<Option<Message>, StoreError>;

    async fn get_all(&self) -> Result<Vec<Message>, StoreError>;

    /// Insert a new message and return it with its assigned identity.
    async fn insert(&self, message: &Message) -> Result<Message, StoreError>;

    /// Replace the stored row. Returns whether a row was affected.
    async fn update(&self, message: &Message) -> Result<bool, StoreError>;

    /// Delete by identity. Returns whether a row was affected.
    async fn delete(&self, message: &Message) -> Result<bool, StoreError>;

    async fn get_by_account_id(&self, account_id: i64) -> Result<Vec<Message>, StoreError>;
}
