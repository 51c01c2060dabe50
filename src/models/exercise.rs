//! Exercise catalog model.

use serde::{Deserialize, Serialize};

/// A single exercise in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub muscle_group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_required: Option<String>,
    pub difficulty_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

/// Request body for creating a new exercise.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExercise {
    pub name: String,
    pub description: String,
    pub muscle_group: String,
    #[serde(default)]
    pub equipment_required: Option<String>,
    pub difficulty_level: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}
