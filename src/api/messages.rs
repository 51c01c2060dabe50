//! Direct message endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{created, success, ApiResult};
use crate::errors::AppError;
use crate::models::{InboxMessage, Message, NewMessage};
use crate::AppState;

/// GET /api/messages/user/{userId} - The user's inbox with senders
/// resolved.
pub async fn list_user_messages(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Vec<InboxMessage>> {
    success(state.store.inbox(user_id)?)
}

/// POST /api/messages - Send a message.
pub async fn create_message(
    State(state): State<AppState>,
    Json(request): Json<NewMessage>,
) -> ApiResult<Message> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("Message text is required".to_string()));
    }
    created(state.store.create_message(request))
}

/// PATCH /api/messages/{id}/read - Mark a message as read.
pub async fn mark_message_read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Message> {
    let message = state
        .store
        .mark_message_read(id)
        .ok_or_else(|| AppError::NotFound(format!("Message {} not found", id)))?;
    success(message)
}
