//! User model and its password-less public view.

use serde::{Deserialize, Serialize};

/// A registered account, either a regular member or a trainer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Bcrypt hash at rest. Never serialized to clients; see [`UserView`].
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_trainer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
}

/// Request body for registering a new user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub weight: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub is_trainer: Option<bool>,
    #[serde(default)]
    pub plan: Option<String>,
}

/// Request body for updating profile fields.
///
/// Username and password are not patchable through this type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub weight: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
}

impl UserPatch {
    /// Shallow-merge: fields left `None` keep their current value.
    pub fn apply(self, user: &mut User) {
        if let Some(first_name) = self.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            user.last_name = last_name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(profile_image) = self.profile_image {
            user.profile_image = Some(profile_image);
        }
        if let Some(weight) = self.weight {
            user.weight = Some(weight);
        }
        if let Some(height) = self.height {
            user.height = Some(height);
        }
        if let Some(age) = self.age {
            user.age = Some(age);
        }
        if let Some(gender) = self.gender {
            user.gender = Some(gender);
        }
        if let Some(goal) = self.goal {
            user.goal = Some(goal);
        }
        if let Some(plan) = self.plan {
            user.plan = Some(plan);
        }
    }
}

/// Serialization of a [`User`] with the password omitted.
///
/// Every user payload the API returns goes through this view, including
/// joined senders and trainers and the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_trainer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            profile_image: user.profile_image,
            weight: user.weight,
            height: user.height,
            age: user.age,
            gender: user.gender,
            goal: user.goal,
            is_trainer: user.is_trainer,
            plan: user.plan,
        }
    }
}

/// Request body for logging in.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
