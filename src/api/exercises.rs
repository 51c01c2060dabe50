//! Exercise catalog endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{created, success, ApiResult};
use crate::errors::AppError;
use crate::models::{Exercise, NewExercise};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseListQuery {
    #[serde(default)]
    muscle_group: Option<String>,
}

/// GET /api/exercises - List exercises, optionally filtered by muscle group.
pub async fn list_exercises(
    State(state): State<AppState>,
    Query(query): Query<ExerciseListQuery>,
) -> ApiResult<Vec<Exercise>> {
    let exercises = match query.muscle_group {
        Some(muscle_group) => state.store.exercises_by_muscle_group(&muscle_group),
        None => state.store.all_exercises(),
    };
    success(exercises)
}

/// GET /api/exercises/{id} - Get a single exercise.
pub async fn get_exercise(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Exercise> {
    let exercise = state
        .store
        .get_exercise(id)
        .ok_or_else(|| AppError::NotFound(format!("Exercise {} not found", id)))?;
    success(exercise)
}

/// POST /api/exercises - Create a new exercise.
pub async fn create_exercise(
    State(state): State<AppState>,
    Json(request): Json<NewExercise>,
) -> ApiResult<Exercise> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }
    created(state.store.create_exercise(request))
}
