//! Meal plan endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;

use super::{created, success, ApiResult};
use crate::errors::AppError;
use crate::models::{MealPlan, MealPlanPatch, NewMealPlan};
use crate::AppState;

/// GET /api/meal-plans/{userId}/today - The user's meal plan for today.
pub async fn todays_meal_plan(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<MealPlan> {
    let today = Utc::now().date_naive();
    let plan = state
        .store
        .meal_plan_for(user_id, today)
        .ok_or_else(|| AppError::NotFound("Meal plan not found for today".to_string()))?;
    success(plan)
}

/// POST /api/meal-plans - Create a meal plan.
pub async fn create_meal_plan(
    State(state): State<AppState>,
    Json(request): Json<NewMealPlan>,
) -> ApiResult<MealPlan> {
    created(state.store.create_meal_plan(request))
}

/// PATCH /api/meal-plans/{id} - Update a meal plan.
pub async fn update_meal_plan(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<MealPlanPatch>,
) -> ApiResult<MealPlan> {
    let plan = state
        .store
        .update_meal_plan(id, patch)
        .ok_or_else(|| AppError::NotFound(format!("Meal plan {} not found", id)))?;
    success(plan)
}
