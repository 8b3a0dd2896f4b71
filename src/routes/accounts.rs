//! Account routes — registration and login.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use crate::models::Account;
use crate::routes::messages::service_error_to_status;
use crate::state::AppState;

/// `POST /register` — create a new account. Any service failure answers 400.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<Account>,
) -> Result<Json<Account>, StatusCode> {
    let created = state
        .accounts
        .create_account(body)
        .await
        .map_err(|err| service_error_to_status(&err))?;
    Ok(Json(created))
}

/// `POST /login` — validate credentials. An absent match and a service
/// failure both answer 401.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<Account>,
) -> Result<Json<Account>, StatusCode> {
    let account = state
        .accounts
        .validate_login(&body)
        .await
        .map_err(|err| {
            warn!(error = %err, "login failed");
            StatusCode::UNAUTHORIZED
        })?
        .ok_or(StatusCode::UNAUTHORIZED)?;
    Ok(Json(account))
}

#[cfg(test)]
#[path = "accounts_test.rs"]
mod tests;
