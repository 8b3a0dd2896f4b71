//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the two services, each constructed over an explicitly injected
//! persistence port. Clone is required by Axum — services clone as cheap
//! `Arc` handles.

use std::sync::Arc;

use sqlx::PgPool;

use crate::services::account::AccountService;
use crate::services::message::MessageService;
use crate::store::postgres::{PgAccountStore, PgMessageStore};

#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
    pub messages: MessageService,
}

impl AppState {
    #[must_use]
    pub fn new(accounts: AccountService, messages: MessageService) -> Self {
        Self { accounts, messages }
    }

    /// Wire both services to Postgres-backed stores over the shared pool.
    #[must_use]
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            AccountService::new(Arc::new(PgAccountStore::new(pool.clone()))),
            MessageService::new(Arc::new(PgMessageStore::new(pool))),
        )
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
