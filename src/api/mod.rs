//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.

mod auth;
mod classes;
mod enrollments;
mod exercises;
mod foods;
mod leaderboard;
mod meal_plans;
mod messages;
mod progress;
mod users;
mod workout_logs;
mod workouts;

pub use auth::*;
pub use classes::*;
pub use enrollments::*;
pub use exercises::*;
pub use foods::*;
pub use leaderboard::*;
pub use meal_plans::*;
pub use messages::*;
pub use progress::*;
pub use users::*;
pub use workout_logs::*;
pub use workouts::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::AppError;

/// Success response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse {
        success: true,
        data,
        status: StatusCode::OK,
    })
}

/// Create a successful API response for a freshly created resource.
pub fn created<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse {
        success: true,
        data,
        status: StatusCode::CREATED,
    })
}

/// Parse a `YYYY-MM-DD` query parameter.
pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".to_string()))
}
