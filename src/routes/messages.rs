//! Message routes.
//!
//! Preserves the legacy transport contract: reads and writes answer 400 for
//! any service failure, a missing message reads as 200 with an empty body,
//! and DELETE answers 200 no matter what.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use crate::models::Message;
use crate::services::ServiceError;
use crate::state::AppState;

/// `POST /messages` — create a message as the claimed author. The author is
/// resolved by id and must match `posted_by`.
pub async fn create_message(
    State(state): State<AppState>,
    Json(body): Json<Message>,
) -> Result<Json<Message>, StatusCode> {
    let author = state
        .accounts
        .get_account_by_id(body.posted_by)
        .await
        .map_err(|err| service_error_to_status(&err))?;
    let created = state
        .messages
        .create_message(body, author)
        .await
        .map_err(|err| service_error_to_status(&err))?;
    Ok(Json(created))
}

/// `GET /messages` — full listing.
pub async fn get_all_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<Message>>, StatusCode> {
    let messages = state.messages.get_all_messages().await.map_err(|err| {
        error!(error = %err, "message listing failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(messages))
}

/// `GET /messages/{message_id}` — single message. A missing id answers 200
/// with an empty body (contract behavior, not 404).
pub async fn get_message_by_id(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Result<Response, StatusCode> {
    let found = state
        .messages
        .get_message_by_id(message_id)
        .await
        .map_err(|err| service_error_to_status(&err))?;
    Ok(match found {
        Some(message) => Json(message).into_response(),
        None => StatusCode::OK.into_response(),
    })
}

/// `DELETE /messages/{message_id}` — delete by id. Answers 200 with the
/// deleted message, or 200 with an empty body when nothing was deleted;
/// failures do not surface here (contract quirk).
pub async fn delete_message_by_id(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Response {
    let found = match state.messages.get_message_by_id(message_id).await {
        Ok(found) => found,
        Err(err) => {
            warn!(error = %err, message_id, "delete lookup failed");
            return StatusCode::OK.into_response();
        }
    };
    let Some(message) = found else {
        return StatusCode::OK.into_response();
    };

    match state.messages.delete_message(&message).await {
        Ok(()) => Json(message).into_response(),
        Err(err) => {
            warn!(error = %err, message_id, "delete failed");
            StatusCode::OK.into_response()
        }
    }
}

/// `PATCH /messages/{message_id}` — replace the message text. The path id
/// wins over any id in the body.
pub async fn update_message_by_id(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
    Json(body): Json<Message>,
) -> Result<Json<Message>, StatusCode> {
    let patch = Message { message_id, ..body };
    let updated = state
        .messages
        .update_message(patch)
        .await
        .map_err(|err| service_error_to_status(&err))?;
    Ok(Json(updated))
}

/// `GET /accounts/{account_id}/messages` — per-account listing. An account
/// with no messages yields an empty list, not an error.
pub async fn get_messages_by_account_id(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
) -> Result<Json<Vec<Message>>, StatusCode> {
    let messages = state
        .messages
        .get_messages_by_account_id(account_id)
        .await
        .map_err(|err| service_error_to_status(&err))?;
    Ok(Json(messages))
}

/// Legacy contract: every service failure kind collapses to 400 on these
/// endpoints. The taxonomy still reaches the log before it is flattened.
pub(crate) fn service_error_to_status(err: &ServiceError) -> StatusCode {
    warn!(error = %err, "rejecting request");
    StatusCode::BAD_REQUEST
}

#[cfg(test)]
#[path = "messages_test.rs"]
mod tests;
