//! Food catalog model.

use serde::{Deserialize, Serialize};

/// A food item with its macro breakdown, in grams per serving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub id: i64,
    pub name: String,
    pub calories: i32,
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<i32>,
    /// Meal-slot tag: breakfast, lunch, dinner or snack.
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Request body for creating a new food.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFood {
    pub name: String,
    pub calories: i32,
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,
    #[serde(default)]
    pub fiber: Option<i32>,
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
}
