//! Class enrollment endpoints.
//!
//! Capacity is enforced inside the store's enroll operation, atomically
//! with the enrollment insert; these handlers only translate errors.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{created, success, ApiResult};
use crate::models::{ClassEnrollment, EnrollmentWithClass, NewClassEnrollment};
use crate::AppState;

/// POST /api/class-enrollments - Enroll a user in a class.
pub async fn enroll_in_class(
    State(state): State<AppState>,
    Json(request): Json<NewClassEnrollment>,
) -> ApiResult<ClassEnrollment> {
    created(state.store.enroll(request)?)
}

/// GET /api/class-enrollments/user/{userId} - A user's enrollments with
/// classes resolved.
pub async fn list_user_enrollments(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Vec<EnrollmentWithClass>> {
    success(state.store.user_enrollments(user_id)?)
}
