//! Workout model and the workout-exercise join.

use serde::{Deserialize, Serialize};

use super::Exercise;

/// A workout template made up of exercises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Duration in minutes.
    pub duration: i32,
    pub difficulty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_muscle_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Request body for creating a new workout.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkout {
    pub name: String,
    pub description: String,
    pub duration: i32,
    pub difficulty: String,
    #[serde(default)]
    pub equipment_required: Option<Vec<String>>,
    #[serde(default)]
    pub target_muscle_groups: Option<Vec<String>>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Join entity placing an exercise inside a workout with set/rep targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub id: i64,
    pub workout_id: i64,
    pub exercise_id: i64,
    pub sets: i32,
    pub reps: i32,
    /// Rest between sets, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_time: Option<i32>,
}

/// Request body for adding an exercise to a workout.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkoutExercise {
    pub workout_id: i64,
    pub exercise_id: i64,
    pub sets: i32,
    pub reps: i32,
    #[serde(default)]
    pub rest_time: Option<i32>,
}

/// A workout-exercise link with its exercise resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExerciseDetail {
    #[serde(flatten)]
    pub link: WorkoutExercise,
    pub exercise: Exercise,
}

/// Request body for the workout recommendation filter.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    pub equipment: Vec<String>,
    pub muscle_groups: Vec<String>,
}
