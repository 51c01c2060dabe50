//! Authentication endpoints.

use axum::{extract::State, Json};

use super::{created, success, ApiResult};
use crate::auth;
use crate::errors::AppError;
use crate::models::{LoginRequest, NewUser, UserView};
use crate::AppState;

/// POST /api/auth/register - Register a new user.
pub async fn register(
    State(state): State<AppState>,
    Json(mut request): Json<NewUser>,
) -> ApiResult<UserView> {
    if request.username.trim().is_empty() || request.password.trim().is_empty() {
        return Err(AppError::Validation(
            "Username and password are required".to_string(),
        ));
    }
    if state
        .store
        .find_user_by_username(&request.username)
        .is_some()
    {
        return Err(AppError::Validation("Username already exists".to_string()));
    }
    if state.store.find_user_by_email(&request.email).is_some() {
        return Err(AppError::Validation("Email already exists".to_string()));
    }

    request.password = auth::hash_password(&request.password)?;
    let user = state.store.create_user(request);

    created(UserView::from(user))
}

/// POST /api/auth/login - Authenticate with username and password.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<UserView> {
    if request.username.is_empty() || request.password.is_empty() {
        return Err(AppError::Validation(
            "Username and password are required".to_string(),
        ));
    }

    let user = state
        .store
        .find_user_by_username(&request.username)
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    if !auth::verify_password(&request.password, &user.password)? {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    success(UserView::from(user))
}
