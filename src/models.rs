//! Wire and domain entities shared by the stores, services, and routes.

use serde::{Deserialize, Serialize};

/// A registered user identity. `account_id` is assigned by the persistence
/// layer on insert and never reused; request bodies may omit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub account_id: i64,
    pub username: String,
    pub password: String,
}

/// A text post attributed to an account via `posted_by`.
///
/// `time_posted` is milliseconds since the Unix epoch, assigned by the
/// message service at creation; client-supplied values are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub message_id: i64,
    pub posted_by: i64,
    pub message_text: String,
    #[serde(default)]
    pub time_posted: i64,
}
