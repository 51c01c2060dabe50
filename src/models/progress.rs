//! Body-progress model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A body-progress measurement for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub id: i64,
    pub user_id: i64,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Request body for recording a progress entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProgressEntry {
    pub user_id: i64,
    pub date: NaiveDate,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub body_fat: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}
