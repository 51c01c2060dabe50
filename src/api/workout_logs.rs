//! Workout log endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{created, parse_date, success, ApiResult};
use crate::errors::AppError;
use crate::models::{LoggedWorkout, NewWorkoutLog, WorkoutLog, WorkoutLogPatch};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeQuery {
    start_date: String,
    end_date: String,
}

/// GET /api/workout-logs/user/{userId} - A user's logs with workouts
/// resolved.
pub async fn list_user_workout_logs(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Vec<LoggedWorkout>> {
    success(state.store.user_workout_logs(user_id)?)
}

/// GET /api/workout-logs/user/{userId}/range - Logs within an inclusive
/// date range.
pub async fn workout_logs_in_range(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(query): Query<RangeQuery>,
) -> ApiResult<Vec<WorkoutLog>> {
    let start = parse_date(&query.start_date)?;
    let end = parse_date(&query.end_date)?;
    success(state.store.workout_logs_in_range(user_id, start, end))
}

/// POST /api/workout-logs - Log a workout.
pub async fn create_workout_log(
    State(state): State<AppState>,
    Json(request): Json<NewWorkoutLog>,
) -> ApiResult<WorkoutLog> {
    created(state.store.create_workout_log(request))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteWorkoutRequest {
    #[serde(default)]
    duration: Option<i32>,
    #[serde(default)]
    calories_burned: Option<i32>,
}

/// PATCH /api/workout-logs/{id}/complete - Mark a log completed, optionally
/// updating its final duration and calories.
pub async fn complete_workout_log(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<CompleteWorkoutRequest>,
) -> ApiResult<WorkoutLog> {
    let patch = WorkoutLogPatch {
        duration: request.duration,
        calories_burned: request.calories_burned,
        completed: Some(true),
        ..WorkoutLogPatch::default()
    };
    let log = state
        .store
        .update_workout_log(id, patch)
        .ok_or_else(|| AppError::NotFound(format!("Workout log {} not found", id)))?;
    success(log)
}
