//! Account service — registration and credential validation.
//!
//! DESIGN
//! ======
//! Registration is check-then-insert: the username lookup here is advisory
//! and the `accounts.username` UNIQUE constraint is the authoritative guard
//! under concurrent registration. Login reports "no match" as an absent
//! result, not an error; only the caller decides what that means on the wire.

use std::sync::Arc;

use tracing::info;

use crate::models::Account;
use crate::services::ServiceError;
use crate::store::AccountStore;

const MIN_PASSWORD_LEN: usize = 4;

#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    #[must_use]
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Register a new account and return it with its assigned identity.
    ///
    /// # Errors
    ///
    /// `Validation` for a blank username or a password shorter than four
    /// characters, `Conflict` when the username is already taken, `Access`
    /// on a persistence fault. Nothing is written unless every check passes.
    pub async fn create_account(&self, candidate: Account) -> Result<Account, ServiceError> {
        if candidate.username.trim().is_empty() {
            return Err(ServiceError::Validation("username cannot be blank".into()));
        }
        if candidate.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ServiceError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if self.store.get_by_username(&candidate.username).await?.is_some() {
            return Err(ServiceError::Conflict(format!(
                "username already exists: {}",
                candidate.username
            )));
        }

        let created = self.store.insert(&candidate).await?;
        info!(account_id = created.account_id, username = %created.username, "created account");
        Ok(created)
    }

    /// Validate credentials. `Ok(None)` means no match — found-and-matching
    /// is the only success.
    ///
    /// # Errors
    ///
    /// `Access` on a persistence fault.
    pub async fn validate_login(&self, candidate: &Account) -> Result<Option<Account>, ServiceError> {
        let found = self.store.get_by_username(&candidate.username).await?;
        Ok(found.filter(|account| account.password == candidate.password))
    }

    /// Lookup passthrough; the message flow uses this to resolve the author.
    ///
    /// # Errors
    ///
    /// `Access` on a persistence fault.
    pub async fn get_account_by_id(&self, id: i64) -> Result<Option<Account>, ServiceError> {
        Ok(self.store.get_by_id(id).await?)
    }
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
