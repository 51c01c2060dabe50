//! Class schedule and enrollment models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserView;

/// A scheduled class run by a trainer.
///
/// `current_participants` always equals the number of enrollment rows for
/// the class and never exceeds `max_participants`; both are maintained by
/// the store's enroll operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSchedule {
    pub id: i64,
    pub trainer_id: i64,
    pub class_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub max_participants: i32,
    pub current_participants: i32,
}

/// Request body for scheduling a class.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClassSchedule {
    pub trainer_id: i64,
    pub class_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub max_participants: i32,
}

/// A class schedule with its trainer resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassWithTrainer {
    #[serde(flatten)]
    pub schedule: ClassSchedule,
    pub trainer: UserView,
}

/// A user's enrollment in a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEnrollment {
    pub id: i64,
    pub class_id: i64,
    pub user_id: i64,
    /// Assigned by the server at enrollment.
    pub enrollment_date: DateTime<Utc>,
}

/// Request body for enrolling in a class.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClassEnrollment {
    pub class_id: i64,
    pub user_id: i64,
}

/// An enrollment with its class resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentWithClass {
    #[serde(flatten)]
    pub enrollment: ClassEnrollment,
    pub class: ClassSchedule,
}
