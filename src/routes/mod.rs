//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the HTTP endpoints to the service layer. Handlers are thin: parse,
//! delegate, map the service outcome to a status code. The service failure
//! taxonomy never leaks onto the wire.

pub mod accounts;
pub mod messages;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Build the application router.
#[must_use]
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/register", post(accounts::register))
        .route("/login", post(accounts::login))
        .route(
            "/messages",
            get(messages::get_all_messages).post(messages::create_message),
        )
        .route(
            "/messages/{message_id}",
            get(messages::get_message_by_id)
                .patch(messages::update_message_by_id)
                .delete(messages::delete_message_by_id),
        )
        .route(
            "/accounts/{account_id}/messages",
            get(messages::get_messages_by_account_id),
        )
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
