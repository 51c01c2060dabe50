//! User profile endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{UserPatch, UserView};
use crate::AppState;

/// GET /api/users/{id} - Get a user profile.
pub async fn get_user(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<UserView> {
    let user = state
        .store
        .get_user(id)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;
    success(UserView::from(user))
}

/// PATCH /api/users/{id} - Update profile fields.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<UserPatch>,
) -> ApiResult<UserView> {
    let user = state
        .store
        .update_user(id, patch)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;
    success(UserView::from(user))
}
