//! Workout log model, the joined log view and the leaderboard entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{UserView, Workout};

/// A logged workout session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    pub id: i64,
    pub user_id: i64,
    pub workout_id: i64,
    pub date: NaiveDate,
    /// Duration in minutes.
    pub duration: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Request body for logging a workout.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkoutLog {
    pub user_id: i64,
    pub workout_id: i64,
    pub date: NaiveDate,
    pub duration: i32,
    #[serde(default)]
    pub calories_burned: Option<i32>,
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Request body for updating a workout log.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLogPatch {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub calories_burned: Option<i32>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl WorkoutLogPatch {
    /// Shallow-merge: fields left `None` keep their current value.
    pub fn apply(self, log: &mut WorkoutLog) {
        if let Some(date) = self.date {
            log.date = date;
        }
        if let Some(duration) = self.duration {
            log.duration = duration;
        }
        if let Some(calories_burned) = self.calories_burned {
            log.calories_burned = Some(calories_burned);
        }
        if let Some(completed) = self.completed {
            log.completed = Some(completed);
        }
    }
}

/// A workout log with its workout resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedWorkout {
    #[serde(flatten)]
    pub log: WorkoutLog,
    pub workout: Workout,
}

/// One ranked row of the leaderboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user: UserView,
    pub points: f64,
}
