//! Leaderboard endpoint.

use axum::extract::State;
use chrono::Utc;

use super::{success, ApiResult};
use crate::models::LeaderboardEntry;
use crate::AppState;

/// GET /api/leaderboard - Users ranked by points over the trailing 30 days.
pub async fn get_leaderboard(State(state): State<AppState>) -> ApiResult<Vec<LeaderboardEntry>> {
    success(state.store.leaderboard(Utc::now().date_naive()))
}
