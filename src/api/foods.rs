//! Food catalog endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{created, success, ApiResult};
use crate::errors::AppError;
use crate::models::{Food, NewFood};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct FoodListQuery {
    #[serde(default)]
    category: Option<String>,
}

/// GET /api/foods - List foods, optionally filtered by meal category.
pub async fn list_foods(
    State(state): State<AppState>,
    Query(query): Query<FoodListQuery>,
) -> ApiResult<Vec<Food>> {
    let foods = match query.category {
        Some(category) => state.store.foods_by_category(&category),
        None => state.store.all_foods(),
    };
    success(foods)
}

/// GET /api/foods/{id} - Get a single food.
pub async fn get_food(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Food> {
    let food = state
        .store
        .get_food(id)
        .ok_or_else(|| AppError::NotFound(format!("Food {} not found", id)))?;
    success(food)
}

/// POST /api/foods - Create a new food.
pub async fn create_food(
    State(state): State<AppState>,
    Json(request): Json<NewFood>,
) -> ApiResult<Food> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }
    created(state.store.create_food(request))
}
