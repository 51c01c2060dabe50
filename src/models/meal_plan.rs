//! Meal plan model.
//!
//! At most one plan exists per (user, date) pair by convention; the store
//! resolves duplicates deterministically by lowest id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One scheduled food entry inside a meal plan.
///
/// `food_id` is a soft reference: it is not validated against the food
/// collection at write time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    pub food_id: i64,
    pub time: String,
    #[serde(rename = "type")]
    pub meal_type: String,
    pub quantity: i32,
}

/// A user's meal plan for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub id: i64,
    pub user_id: i64,
    pub date: NaiveDate,
    pub meals: Vec<MealEntry>,
}

/// Request body for creating a meal plan.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMealPlan {
    pub user_id: i64,
    pub date: NaiveDate,
    pub meals: Vec<MealEntry>,
}

/// Request body for updating a meal plan.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanPatch {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub meals: Option<Vec<MealEntry>>,
}

impl MealPlanPatch {
    /// Shallow-merge: fields left `None` keep their current value.
    pub fn apply(self, plan: &mut MealPlan) {
        if let Some(date) = self.date {
            plan.date = date;
        }
        if let Some(meals) = self.meals {
            plan.meals = meals;
        }
    }
}
