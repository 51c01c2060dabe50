//! Workout endpoints, including the recommendation filter and the
//! workout-exercise join.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{created, success, ApiResult};
use crate::errors::AppError;
use crate::models::{
    NewWorkout, NewWorkoutExercise, RecommendRequest, Workout, WorkoutExercise,
    WorkoutExerciseDetail,
};
use crate::AppState;

/// GET /api/workouts - List all workouts.
pub async fn list_workouts(State(state): State<AppState>) -> ApiResult<Vec<Workout>> {
    success(state.store.all_workouts())
}

/// GET /api/workouts/{id} - Get a single workout.
pub async fn get_workout(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Workout> {
    let workout = state
        .store
        .get_workout(id)
        .ok_or_else(|| AppError::NotFound(format!("Workout {} not found", id)))?;
    success(workout)
}

/// POST /api/workouts - Create a new workout.
pub async fn create_workout(
    State(state): State<AppState>,
    Json(request): Json<NewWorkout>,
) -> ApiResult<Workout> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }
    created(state.store.create_workout(request))
}

/// POST /api/workouts/recommend - Filter workouts by equipment and muscle
/// groups.
pub async fn recommend_workouts(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> ApiResult<Vec<Workout>> {
    success(
        state
            .store
            .recommend_workouts(&request.equipment, &request.muscle_groups),
    )
}

/// GET /api/workouts/{id}/exercises - The exercises of a workout with their
/// details resolved.
pub async fn list_workout_exercises(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Vec<WorkoutExerciseDetail>> {
    success(state.store.workout_exercises(id)?)
}

/// POST /api/workout-exercises - Add an exercise to a workout.
pub async fn add_workout_exercise(
    State(state): State<AppState>,
    Json(request): Json<NewWorkoutExercise>,
) -> ApiResult<WorkoutExercise> {
    created(state.store.add_workout_exercise(request))
}
