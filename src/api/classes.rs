//! Class schedule endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{created, success, ApiResult};
use crate::errors::AppError;
use crate::models::{ClassSchedule, ClassWithTrainer, NewClassSchedule};
use crate::AppState;

/// GET /api/class-schedules - All classes with their trainers resolved.
pub async fn list_classes(State(state): State<AppState>) -> ApiResult<Vec<ClassWithTrainer>> {
    success(state.store.all_classes()?)
}

/// GET /api/class-schedules/{id} - Get a single class schedule.
pub async fn get_class_schedule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<ClassSchedule> {
    let class = state
        .store
        .get_class(id)
        .ok_or_else(|| AppError::NotFound(format!("Class {} not found", id)))?;
    success(class)
}

/// GET /api/class-schedules/trainer/{trainerId} - Classes run by one
/// trainer.
pub async fn list_trainer_classes(
    State(state): State<AppState>,
    Path(trainer_id): Path<i64>,
) -> ApiResult<Vec<ClassSchedule>> {
    success(state.store.trainer_classes(trainer_id))
}

/// POST /api/class-schedules - Schedule a class.
pub async fn create_class(
    State(state): State<AppState>,
    Json(request): Json<NewClassSchedule>,
) -> ApiResult<ClassSchedule> {
    if request.class_name.trim().is_empty() {
        return Err(AppError::Validation("Class name is required".to_string()));
    }
    if request.max_participants < 1 {
        return Err(AppError::Validation(
            "Max participants must be at least 1".to_string(),
        ));
    }
    created(state.store.create_class(request))
}
