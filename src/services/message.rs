//! Message service — lifecycle rules and per-account write authorization.
//!
//! ERROR HANDLING
//! ==============
//! Port faults are never swallowed: every storage error rewraps as
//! `ServiceError::Access` with the original fault as source, keeping
//! infrastructure trouble distinct from semantic rejection.
//!
//! Update and delete perform no ownership check against the requesting
//! account — preserved legacy behavior; only creation verifies the author.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::info;

use crate::models::{Account, Message};
use crate::services::ServiceError;
use crate::store::MessageStore;

const MAX_MESSAGE_LEN: usize = 254;

/// Current time as milliseconds since Unix epoch.
fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

#[derive(Clone)]
pub struct MessageService {
    store: Arc<dyn MessageStore>,
}

impl MessageService {
    #[must_use]
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    /// Create a message as `author`, stamping `time_posted` from the system
    /// clock. The authenticated author must match the claimed `posted_by`.
    ///
    /// # Errors
    ///
    /// `Authorization` when `author` is absent or does not match
    /// `candidate.posted_by`, `Validation` for bad text, `Access` on a
    /// persistence fault.
    pub async fn create_message(
        &self,
        candidate: Message,
        author: Option<Account>,
    ) -> Result<Message, ServiceError> {
        let Some(author) = author else {
            return Err(ServiceError::Authorization(
                "account must exist when posting a new message".into(),
            ));
        };
        validate_text(&candidate.message_text)?;
        if author.account_id != candidate.posted_by {
            return Err(ServiceError::Authorization(
                "account not authorized to post as another account".into(),
            ));
        }

        let message = Message { time_posted: now_ms(), ..candidate };
        let created = self.store.insert(&message).await?;
        info!(message_id = created.message_id, posted_by = created.posted_by, "created message");
        Ok(created)
    }

    /// Lookup by identity. Absence is `Ok(None)`, never an error.
    ///
    /// # Errors
    ///
    /// `Access` on a persistence fault.
    pub async fn get_message_by_id(&self, id: i64) -> Result<Option<Message>, ServiceError> {
        Ok(self.store.get_by_id(id).await?)
    }

    /// Full listing; ordering is the persistence layer's (insertion order
    /// for the Postgres store).
    ///
    /// # Errors
    ///
    /// `Access` on a persistence fault.
    pub async fn get_all_messages(&self) -> Result<Vec<Message>, ServiceError> {
        Ok(self.store.get_all().await?)
    }

    /// Messages posted by one account. An empty listing is a valid result.
    ///
    /// # Errors
    ///
    /// `Access` on a persistence fault.
    pub async fn get_messages_by_account_id(&self, account_id: i64) -> Result<Vec<Message>, ServiceError> {
        Ok(self.store.get_by_account_id(account_id).await?)
    }

    /// Replace the text of an existing message. Identity, author, and
    /// timestamp are immutable here.
    ///
    /// # Errors
    ///
    /// `NotFound` when `patch.message_id` does not exist (nothing is
    /// mutated), `Validation` for bad text, `Access` on a persistence fault.
    pub async fn update_message(&self, patch: Message) -> Result<Message, ServiceError> {
        let Some(existing) = self.store.get_by_id(patch.message_id).await? else {
            return Err(ServiceError::NotFound(format!("message not found: {}", patch.message_id)));
        };
        validate_text(&patch.message_text)?;

        let merged = Message { message_text: patch.message_text, ..existing };
        self.store.update(&merged).await?;
        info!(message_id = merged.message_id, "updated message");
        Ok(merged)
    }

    /// Delete by identity. Deleting twice never succeeds twice.
    ///
    /// # Errors
    ///
    /// `NotFound` when the port reports no row affected, `Access` on a
    /// persistence fault.
    pub async fn delete_message(&self, message: &Message) -> Result<(), ServiceError> {
        let deleted = self.store.delete(message).await?;
        if !deleted {
            return Err(ServiceError::NotFound(format!(
                "message to delete not found: {}",
                message.message_id
            )));
        }
        info!(message_id = message.message_id, "deleted message");
        Ok(())
    }
}

/// Shared text rule: non-empty after trimming, at most 254 characters of
/// raw (untrimmed) text.
fn validate_text(text: &str) -> Result<(), ServiceError> {
    if text.trim().is_empty() {
        return Err(ServiceError::Validation("message text cannot be blank".into()));
    }
    if text.chars().count() > MAX_MESSAGE_LEN {
        return Err(ServiceError::Validation(format!(
            "message text cannot exceed {MAX_MESSAGE_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "message_test.rs"]
mod tests;
