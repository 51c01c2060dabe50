//! Body-progress endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{created, parse_date, success, ApiResult};
use crate::models::{NewProgressEntry, ProgressEntry};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRangeQuery {
    start_date: String,
    end_date: String,
}

/// GET /api/progress/user/{userId} - All progress entries for a user.
pub async fn list_user_progress(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Vec<ProgressEntry>> {
    success(state.store.user_progress(user_id))
}

/// GET /api/progress/user/{userId}/range - Entries within an inclusive date
/// range.
pub async fn progress_in_range(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(query): Query<ProgressRangeQuery>,
) -> ApiResult<Vec<ProgressEntry>> {
    let start = parse_date(&query.start_date)?;
    let end = parse_date(&query.end_date)?;
    success(state.store.progress_in_range(user_id, start, end))
}

/// POST /api/progress - Record a progress entry.
pub async fn create_progress_entry(
    State(state): State<AppState>,
    Json(request): Json<NewProgressEntry>,
) -> ApiResult<ProgressEntry> {
    created(state.store.create_progress_entry(request))
}
