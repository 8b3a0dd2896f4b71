//! Postgres implementations of the persistence ports.

use sqlx::PgPool;

use crate::models::{Account, Message};
use crate::store::{AccountStore, MessageStore, StoreError};

pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl AccountStore for PgAccountStore {
    async fn get_by_id(&self, id: i64) -> Result<Option<Account>, StoreError> {
        let row = sqlx::query_as::<_, (i64, String, String)>(
            "SELECT account_id, username, password FROM accounts WHERE account_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(account_id, username, password)| Account { account_id, username, password }))
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<Account>, StoreError> {
        let row = sqlx::query_as::<_, (i64, String, String)>(
            "SELECT account_id, username, password FROM accounts WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(account_id, username, password)| Account { account_id, username, password }))
    }

    async fn insert(&self, account: &Account) -> Result<Account, StoreError> {
        let account_id: i64 = sqlx::query_scalar(
            "INSERT INTO accounts (username, password) VALUES ($1, $2) RETURNING account_id",
        )
        .bind(&account.username)
        .bind(&account.password)
        .fetch_one(&self.pool)
        .await?;

        Ok(Account {
            account_id,
            username: account.username.clone(),
            password: account.password.clone(),
        })
    }
}

pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_message((message_id, posted_by, message_text, time_posted): (i64, i64, String, i64)) -> Message {
    Message { message_id, posted_by, message_text, time_posted }
}

#[async_trait::async_trait]
impl MessageStore for PgMessageStore {
    async fn get_by_id(&self, id: i64) -> Result<Option<Message>, StoreError> {
        let row = sqlx::query_as::<_, (i64, i64, String, i64)>(
            "SELECT message_id, posted_by, message_text, time_posted
             FROM messages WHERE message_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(row_to_message))
    }

    async fn get_all(&self) -> Result<Vec<Message>, StoreError> {
        let rows = sqlx::query_as::<_, (i64, i64, String, i64)>(
            "SELECT message_id, posted_by, message_text, time_posted
             FROM messages ORDER BY message_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(row_to_message).collect())
    }

    async fn insert(&self, message: &Message) -> Result<Message, StoreError> {
        let message_id: i64 = sqlx::query_scalar(
            "INSERT INTO messages (posted_by, message_text, time_posted)
             VALUES ($1, $2, $3) RETURNING message_id",
        )
        .bind(message.posted_by)
        .bind(&message.message_text)
        .bind(message.time_posted)
        .fetch_one(&self.pool)
        .await?;

        Ok(Message { message_id, ..message.clone() })
    }

    async fn update(&self, message: &Message) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE messages SET message_text = $1 WHERE message_id = $2")
            .bind(&message.message_text)
            .bind(message.message_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, message: &Message) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM messages WHERE message_id = $1")
            .bind(message.message_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_by_account_id(&self, account_id: i64) -> Result<Vec<Message>, StoreError> {
        let rows = sqlx::query_as::<_, (i64, i64, String, i64)>(
            "SELECT message_id, posted_by, message_text, time_posted
             FROM messages WHERE posted_by = $1 ORDER BY message_id",
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(row_to_message).collect())
    }
}

#[cfg(all(test, feature = "live-db-tests"))]
#[path = "postgres_test.rs"]
mod tests;
