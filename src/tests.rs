//! Integration tests for the FitTrack backend.

use std::sync::Arc;

use chrono::{Days, Utc};
use reqwest::Client;
use serde_json::{json, Value};

use crate::store::Store;
use crate::{create_router, AppState};

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
}

impl TestFixture {
    /// Spawn the app on a random port over an empty store.
    async fn new() -> Self {
        let state = AppState {
            store: Arc::new(Store::new()),
        };

        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestFixture {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Register a user and return its payload.
async fn register_user(fixture: &TestFixture, username: &str) -> Value {
    let resp = fixture
        .client
        .post(fixture.url("/api/auth/register"))
        .json(&json!({
            "username": username,
            "password": "password123",
            "firstName": "Test",
            "lastName": "User",
            "email": format!("{}@example.com", username)
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    body["data"].clone()
}

/// Create a workout and return its payload.
async fn create_workout(
    fixture: &TestFixture,
    name: &str,
    equipment: &[&str],
    muscles: &[&str],
) -> Value {
    let resp = fixture
        .client
        .post(fixture.url("/api/workouts"))
        .json(&json!({
            "name": name,
            "description": "A test workout",
            "duration": 45,
            "difficulty": "intermediate",
            "equipmentRequired": equipment,
            "targetMuscleGroups": muscles
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    body["data"].clone()
}

/// Log a workout for a user on the given date.
async fn create_workout_log(
    fixture: &TestFixture,
    user_id: i64,
    workout_id: i64,
    date: &str,
    duration: i32,
    completed: bool,
) -> Value {
    let resp = fixture
        .client
        .post(fixture.url("/api/workout-logs"))
        .json(&json!({
            "userId": user_id,
            "workoutId": workout_id,
            "date": date,
            "duration": duration,
            "completed": completed
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    body["data"].clone()
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_register_strips_password_and_login_succeeds() {
    let fixture = TestFixture::new().await;

    let user = register_user(&fixture, "rahul_sharma").await;
    assert_eq!(user["username"], "rahul_sharma");
    assert!(user["password"].is_null());
    assert!(user["id"].is_number());

    let login_resp = fixture
        .client
        .post(fixture.url("/api/auth/login"))
        .json(&json!({
            "username": "rahul_sharma",
            "password": "password123"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(login_resp.status(), 200);
    let login_body: Value = login_resp.json().await.unwrap();
    assert_eq!(login_body["data"]["username"], "rahul_sharma");
    assert!(login_body["data"]["password"].is_null());
}

#[tokio::test]
async fn test_register_rejects_duplicates() {
    let fixture = TestFixture::new().await;

    register_user(&fixture, "taken").await;

    let dup_username = fixture
        .client
        .post(fixture.url("/api/auth/register"))
        .json(&json!({
            "username": "taken",
            "password": "password123",
            "firstName": "Other",
            "lastName": "User",
            "email": "other@example.com"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(dup_username.status(), 400);
    let body: Value = dup_username.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let dup_email = fixture
        .client
        .post(fixture.url("/api/auth/register"))
        .json(&json!({
            "username": "someone_else",
            "password": "password123",
            "firstName": "Other",
            "lastName": "User",
            "email": "taken@example.com"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(dup_email.status(), 400);
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let fixture = TestFixture::new().await;

    register_user(&fixture, "secure_user").await;

    let wrong_password = fixture
        .client
        .post(fixture.url("/api/auth/login"))
        .json(&json!({
            "username": "secure_user",
            "password": "wrong-password"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(wrong_password.status(), 401);
    let body: Value = wrong_password.json().await.unwrap();
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    let unknown_user = fixture
        .client
        .post(fixture.url("/api/auth/login"))
        .json(&json!({
            "username": "nobody",
            "password": "password123"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown_user.status(), 401);
}

#[tokio::test]
async fn test_get_and_patch_user() {
    let fixture = TestFixture::new().await;

    let user = register_user(&fixture, "patch_me").await;
    let user_id = user["id"].as_i64().unwrap();

    let get_resp = fixture
        .client
        .get(fixture.url(&format!("/api/users/{}", user_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(get_resp.status(), 200);
    let get_body: Value = get_resp.json().await.unwrap();
    assert_eq!(get_body["data"]["username"], "patch_me");
    assert!(get_body["data"]["password"].is_null());

    let patch_resp = fixture
        .client
        .patch(fixture.url(&format!("/api/users/{}", user_id)))
        .json(&json!({ "weight": 74, "goal": "weight_loss" }))
        .send()
        .await
        .unwrap();
    assert_eq!(patch_resp.status(), 200);
    let patch_body: Value = patch_resp.json().await.unwrap();
    assert_eq!(patch_body["data"]["weight"], 74);
    assert_eq!(patch_body["data"]["goal"], "weight_loss");
    assert_eq!(patch_body["data"]["username"], "patch_me");

    let missing_resp = fixture
        .client
        .patch(fixture.url("/api/users/9999"))
        .json(&json!({ "weight": 74 }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing_resp.status(), 404);
}

#[tokio::test]
async fn test_workout_crud() {
    let fixture = TestFixture::new().await;

    let workout = create_workout(&fixture, "Barbell Strength", &["barbell"], &["legs"]).await;
    let workout_id = workout["id"].as_i64().unwrap();
    assert_eq!(workout["duration"], 45);

    let get_resp = fixture
        .client
        .get(fixture.url(&format!("/api/workouts/{}", workout_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(get_resp.status(), 200);
    let get_body: Value = get_resp.json().await.unwrap();
    assert_eq!(get_body["data"]["name"], "Barbell Strength");

    let list_resp = fixture
        .client
        .get(fixture.url("/api/workouts"))
        .send()
        .await
        .unwrap();
    let list_body: Value = list_resp.json().await.unwrap();
    assert_eq!(list_body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_workout_exercises_join() {
    let fixture = TestFixture::new().await;

    let workout = create_workout(&fixture, "Leg Day", &["barbell"], &["legs"]).await;
    let workout_id = workout["id"].as_i64().unwrap();

    let exercise_resp = fixture
        .client
        .post(fixture.url("/api/exercises"))
        .json(&json!({
            "name": "Barbell Squat",
            "description": "Compound lower-body lift",
            "muscleGroup": "legs",
            "equipmentRequired": "barbell",
            "difficultyLevel": "intermediate"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(exercise_resp.status(), 201);
    let exercise_body: Value = exercise_resp.json().await.unwrap();
    let exercise_id = exercise_body["data"]["id"].as_i64().unwrap();

    let link_resp = fixture
        .client
        .post(fixture.url("/api/workout-exercises"))
        .json(&json!({
            "workoutId": workout_id,
            "exerciseId": exercise_id,
            "sets": 4,
            "reps": 8,
            "restTime": 90
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(link_resp.status(), 201);

    let join_resp = fixture
        .client
        .get(fixture.url(&format!("/api/workouts/{}/exercises", workout_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(join_resp.status(), 200);
    let join_body: Value = join_resp.json().await.unwrap();
    let rows = join_body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["sets"], 4);
    assert_eq!(rows[0]["exercise"]["name"], "Barbell Squat");
}

#[tokio::test]
async fn test_workout_recommendation() {
    let fixture = TestFixture::new().await;

    create_workout(&fixture, "Barbell Strength", &["barbell"], &["legs", "chest"]).await;

    let matching = fixture
        .client
        .post(fixture.url("/api/workouts/recommend"))
        .json(&json!({
            "equipment": ["barbell", "dumbbell"],
            "muscleGroups": ["legs"]
        }))
        .send()
        .await
        .unwrap();
    let matching_body: Value = matching.json().await.unwrap();
    assert_eq!(matching_body["data"].as_array().unwrap().len(), 1);

    let no_equipment_overlap = fixture
        .client
        .post(fixture.url("/api/workouts/recommend"))
        .json(&json!({
            "equipment": ["kettlebell"],
            "muscleGroups": ["legs"]
        }))
        .send()
        .await
        .unwrap();
    let excluded_body: Value = no_equipment_overlap.json().await.unwrap();
    assert!(excluded_body["data"].as_array().unwrap().is_empty());

    let empty_criteria = fixture
        .client
        .post(fixture.url("/api/workouts/recommend"))
        .json(&json!({ "equipment": [], "muscleGroups": [] }))
        .send()
        .await
        .unwrap();
    let all_body: Value = empty_criteria.json().await.unwrap();
    assert_eq!(all_body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_exercise_muscle_group_filter() {
    let fixture = TestFixture::new().await;

    for (name, group) in [("Barbell Squat", "legs"), ("Bench Press", "chest")] {
        let resp = fixture
            .client
            .post(fixture.url("/api/exercises"))
            .json(&json!({
                "name": name,
                "description": "An exercise",
                "muscleGroup": group,
                "difficultyLevel": "intermediate"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
    }

    let filtered = fixture
        .client
        .get(fixture.url("/api/exercises?muscleGroup=legs"))
        .send()
        .await
        .unwrap();
    let filtered_body: Value = filtered.json().await.unwrap();
    let rows = filtered_body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Barbell Squat");

    let all = fixture
        .client
        .get(fixture.url("/api/exercises"))
        .send()
        .await
        .unwrap();
    let all_body: Value = all.json().await.unwrap();
    assert_eq!(all_body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_food_category_filter() {
    let fixture = TestFixture::new().await;

    for (name, category) in [("Masala Oats", "breakfast"), ("Vegetable Curry", "dinner")] {
        let resp = fixture
            .client
            .post(fixture.url("/api/foods"))
            .json(&json!({
                "name": name,
                "calories": 250,
                "protein": 10,
                "carbs": 40,
                "fat": 5,
                "category": category
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
    }

    let filtered = fixture
        .client
        .get(fixture.url("/api/foods?category=breakfast"))
        .send()
        .await
        .unwrap();
    let filtered_body: Value = filtered.json().await.unwrap();
    let rows = filtered_body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Masala Oats");
}

#[tokio::test]
async fn test_meal_plan_for_today() {
    let fixture = TestFixture::new().await;

    let today = Utc::now().date_naive().to_string();
    let create_resp = fixture
        .client
        .post(fixture.url("/api/meal-plans"))
        .json(&json!({
            "userId": 1,
            "date": today,
            "meals": [
                { "foodId": 1, "time": "8:00 AM", "type": "breakfast", "quantity": 1 }
            ]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(create_resp.status(), 201);
    let create_body: Value = create_resp.json().await.unwrap();
    let plan_id = create_body["data"]["id"].as_i64().unwrap();

    let today_resp = fixture
        .client
        .get(fixture.url("/api/meal-plans/1/today"))
        .send()
        .await
        .unwrap();
    assert_eq!(today_resp.status(), 200);
    let today_body: Value = today_resp.json().await.unwrap();
    assert_eq!(today_body["data"]["id"], plan_id);
    assert_eq!(today_body["data"]["meals"][0]["type"], "breakfast");

    // No plan exists for this user.
    let missing_resp = fixture
        .client
        .get(fixture.url("/api/meal-plans/2/today"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing_resp.status(), 404);

    let patch_resp = fixture
        .client
        .patch(fixture.url(&format!("/api/meal-plans/{}", plan_id)))
        .json(&json!({
            "meals": [
                { "foodId": 2, "time": "1:00 PM", "type": "lunch", "quantity": 2 }
            ]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(patch_resp.status(), 200);
    let patch_body: Value = patch_resp.json().await.unwrap();
    assert_eq!(patch_body["data"]["meals"][0]["type"], "lunch");
    assert_eq!(patch_body["data"]["meals"][0]["quantity"], 2);
}

#[tokio::test]
async fn test_workout_log_range_is_inclusive() {
    let fixture = TestFixture::new().await;

    let workout = create_workout(&fixture, "W", &[], &[]).await;
    let workout_id = workout["id"].as_i64().unwrap();

    for date in ["2025-05-31", "2025-06-01", "2025-06-04", "2025-06-07", "2025-06-08"] {
        create_workout_log(&fixture, 1, workout_id, date, 30, true).await;
    }

    let range_resp = fixture
        .client
        .get(fixture.url(
            "/api/workout-logs/user/1/range?startDate=2025-06-01&endDate=2025-06-07",
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(range_resp.status(), 200);
    let range_body: Value = range_resp.json().await.unwrap();
    let dates: Vec<&str> = range_body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|log| log["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2025-06-01", "2025-06-04", "2025-06-07"]);
}

#[tokio::test]
async fn test_complete_workout_log() {
    let fixture = TestFixture::new().await;

    let workout = create_workout(&fixture, "W", &[], &[]).await;
    let workout_id = workout["id"].as_i64().unwrap();
    let log = create_workout_log(&fixture, 1, workout_id, "2025-06-01", 40, false).await;
    let log_id = log["id"].as_i64().unwrap();

    let complete_resp = fixture
        .client
        .patch(fixture.url(&format!("/api/workout-logs/{}/complete", log_id)))
        .json(&json!({ "duration": 52, "caloriesBurned": 360 }))
        .send()
        .await
        .unwrap();
    assert_eq!(complete_resp.status(), 200);
    let complete_body: Value = complete_resp.json().await.unwrap();
    assert_eq!(complete_body["data"]["completed"], true);
    assert_eq!(complete_body["data"]["duration"], 52);
    assert_eq!(complete_body["data"]["caloriesBurned"], 360);
    assert_eq!(complete_body["data"]["date"], "2025-06-01");

    let missing_resp = fixture
        .client
        .patch(fixture.url("/api/workout-logs/999/complete"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(missing_resp.status(), 404);
}

#[tokio::test]
async fn test_progress_range() {
    let fixture = TestFixture::new().await;

    for (date, weight) in [("2025-06-01", 78.0), ("2025-06-15", 77.0), ("2025-07-01", 76.2)] {
        let resp = fixture
            .client
            .post(fixture.url("/api/progress"))
            .json(&json!({ "userId": 1, "date": date, "weight": weight }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
    }

    let range_resp = fixture
        .client
        .get(fixture.url(
            "/api/progress/user/1/range?startDate=2025-06-01&endDate=2025-06-30",
        ))
        .send()
        .await
        .unwrap();
    let range_body: Value = range_resp.json().await.unwrap();
    assert_eq!(range_body["data"].as_array().unwrap().len(), 2);

    let all_resp = fixture
        .client
        .get(fixture.url("/api/progress/user/1"))
        .send()
        .await
        .unwrap();
    let all_body: Value = all_resp.json().await.unwrap();
    assert_eq!(all_body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_message_round_trip() {
    let fixture = TestFixture::new().await;

    let sender = register_user(&fixture, "trainer_priya").await;
    let receiver = register_user(&fixture, "member_rahul").await;
    let sender_id = sender["id"].as_i64().unwrap();
    let receiver_id = receiver["id"].as_i64().unwrap();

    let create_resp = fixture
        .client
        .post(fixture.url("/api/messages"))
        .json(&json!({
            "senderId": sender_id,
            "receiverId": receiver_id,
            "message": "Great job on the leg workout!"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(create_resp.status(), 201);
    let create_body: Value = create_resp.json().await.unwrap();
    let message_id = create_body["data"]["id"].as_i64().unwrap();
    assert_eq!(create_body["data"]["read"], false);
    assert!(create_body["data"]["timestamp"].is_string());

    let inbox_resp = fixture
        .client
        .get(fixture.url(&format!("/api/messages/user/{}", receiver_id)))
        .send()
        .await
        .unwrap();
    let inbox_body: Value = inbox_resp.json().await.unwrap();
    let inbox = inbox_body["data"].as_array().unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0]["sender"]["username"], "trainer_priya");
    assert!(inbox[0]["sender"]["password"].is_null());

    // The sender's own inbox is empty.
    let sender_inbox_resp = fixture
        .client
        .get(fixture.url(&format!("/api/messages/user/{}", sender_id)))
        .send()
        .await
        .unwrap();
    let sender_inbox_body: Value = sender_inbox_resp.json().await.unwrap();
    assert!(sender_inbox_body["data"].as_array().unwrap().is_empty());

    let read_resp = fixture
        .client
        .patch(fixture.url(&format!("/api/messages/{}/read", message_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(read_resp.status(), 200);
    let read_body: Value = read_resp.json().await.unwrap();
    assert_eq!(read_body["data"]["read"], true);
    assert_eq!(read_body["data"]["message"], "Great job on the leg workout!");
    assert_eq!(read_body["data"]["timestamp"], create_body["data"]["timestamp"]);
}

#[tokio::test]
async fn test_class_schedules_attach_trainer() {
    let fixture = TestFixture::new().await;

    let trainer = register_user(&fixture, "trainer_amit").await;
    let trainer_id = trainer["id"].as_i64().unwrap();

    let create_resp = fixture
        .client
        .post(fixture.url("/api/class-schedules"))
        .json(&json!({
            "trainerId": trainer_id,
            "className": "HIIT Workout",
            "description": "High intensity interval training",
            "startTime": "2026-09-01T09:00:00Z",
            "endTime": "2026-09-01T10:00:00Z",
            "maxParticipants": 15
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(create_resp.status(), 201);
    let create_body: Value = create_resp.json().await.unwrap();
    assert_eq!(create_body["data"]["currentParticipants"], 0);

    let list_resp = fixture
        .client
        .get(fixture.url("/api/class-schedules"))
        .send()
        .await
        .unwrap();
    let list_body: Value = list_resp.json().await.unwrap();
    let classes = list_body["data"].as_array().unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0]["trainer"]["username"], "trainer_amit");
    assert!(classes[0]["trainer"]["password"].is_null());

    let by_trainer_resp = fixture
        .client
        .get(fixture.url(&format!("/api/class-schedules/trainer/{}", trainer_id)))
        .send()
        .await
        .unwrap();
    let by_trainer_body: Value = by_trainer_resp.json().await.unwrap();
    assert_eq!(by_trainer_body["data"].as_array().unwrap().len(), 1);

    let class_id = create_body["data"]["id"].as_i64().unwrap();
    let get_resp = fixture
        .client
        .get(fixture.url(&format!("/api/class-schedules/{}", class_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(get_resp.status(), 200);
    let get_body: Value = get_resp.json().await.unwrap();
    assert_eq!(get_body["data"]["className"], "HIIT Workout");
}

#[tokio::test]
async fn test_enrollment_flow_and_capacity() {
    let fixture = TestFixture::new().await;

    let trainer = register_user(&fixture, "class_trainer").await;
    let trainer_id = trainer["id"].as_i64().unwrap();

    let class_resp = fixture
        .client
        .post(fixture.url("/api/class-schedules"))
        .json(&json!({
            "trainerId": trainer_id,
            "className": "Morning Yoga",
            "startTime": "2026-09-01T09:00:00Z",
            "endTime": "2026-09-01T10:00:00Z",
            "maxParticipants": 1
        }))
        .send()
        .await
        .unwrap();
    let class_body: Value = class_resp.json().await.unwrap();
    let class_id = class_body["data"]["id"].as_i64().unwrap();

    let enroll_resp = fixture
        .client
        .post(fixture.url("/api/class-enrollments"))
        .json(&json!({ "classId": class_id, "userId": 7 }))
        .send()
        .await
        .unwrap();
    assert_eq!(enroll_resp.status(), 201);
    let enroll_body: Value = enroll_resp.json().await.unwrap();
    assert!(enroll_body["data"]["enrollmentDate"].is_string());

    // The participant counter moved with the enrollment.
    let list_resp = fixture
        .client
        .get(fixture.url("/api/class-schedules"))
        .send()
        .await
        .unwrap();
    let list_body: Value = list_resp.json().await.unwrap();
    assert_eq!(list_body["data"][0]["currentParticipants"], 1);

    let enrollments_resp = fixture
        .client
        .get(fixture.url("/api/class-enrollments/user/7"))
        .send()
        .await
        .unwrap();
    let enrollments_body: Value = enrollments_resp.json().await.unwrap();
    let enrollments = enrollments_body["data"].as_array().unwrap();
    assert_eq!(enrollments.len(), 1);
    assert_eq!(enrollments[0]["class"]["className"], "Morning Yoga");

    // The class is full now.
    let full_resp = fixture
        .client
        .post(fixture.url("/api/class-enrollments"))
        .json(&json!({ "classId": class_id, "userId": 8 }))
        .send()
        .await
        .unwrap();
    assert_eq!(full_resp.status(), 400);
    let full_body: Value = full_resp.json().await.unwrap();
    assert_eq!(full_body["error"]["code"], "CLASS_FULL");

    let unknown_resp = fixture
        .client
        .post(fixture.url("/api/class-enrollments"))
        .json(&json!({ "classId": 999, "userId": 8 }))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown_resp.status(), 404);
}

#[tokio::test]
async fn test_leaderboard_window_and_ranking() {
    let fixture = TestFixture::new().await;

    let recent = register_user(&fixture, "recent").await;
    let stale = register_user(&fixture, "stale").await;
    let busy = register_user(&fixture, "busy").await;
    let single = register_user(&fixture, "single").await;

    let workout = create_workout(&fixture, "W", &[], &[]).await;
    let workout_id = workout["id"].as_i64().unwrap();

    let today = Utc::now().date_naive();
    let yesterday = (today - Days::new(1)).to_string();
    let long_ago = (today - Days::new(40)).to_string();
    let today = today.to_string();

    create_workout_log(&fixture, recent["id"].as_i64().unwrap(), workout_id, &yesterday, 45, true)
        .await;
    create_workout_log(&fixture, stale["id"].as_i64().unwrap(), workout_id, &long_ago, 60, true)
        .await;
    create_workout_log(&fixture, busy["id"].as_i64().unwrap(), workout_id, &today, 30, true).await;
    create_workout_log(&fixture, busy["id"].as_i64().unwrap(), workout_id, &today, 20, true).await;
    create_workout_log(&fixture, single["id"].as_i64().unwrap(), workout_id, &today, 40, true)
        .await;
    // Incomplete logs never score.
    create_workout_log(&fixture, single["id"].as_i64().unwrap(), workout_id, &today, 90, false)
        .await;

    let resp = fixture
        .client
        .get(fixture.url("/api/leaderboard"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let board = body["data"].as_array().unwrap();

    // "stale" is outside the 30-day window entirely.
    assert_eq!(board.len(), 3);
    assert_eq!(board[0]["user"]["username"], "busy");
    assert_eq!(board[0]["points"], 50.0);
    assert_eq!(board[1]["user"]["username"], "recent");
    assert_eq!(board[1]["points"], 45.0);
    assert_eq!(board[2]["user"]["username"], "single");
    assert_eq!(board[2]["points"], 40.0);
    assert!(board[0]["user"]["password"].is_null());
}

#[tokio::test]
async fn test_not_found_errors() {
    let fixture = TestFixture::new().await;

    for path in [
        "/api/users/999",
        "/api/workouts/999",
        "/api/exercises/999",
        "/api/foods/999",
    ] {
        let resp = fixture.client.get(fixture.url(path)).send().await.unwrap();
        assert_eq!(resp.status(), 404, "expected 404 for {}", path);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}

#[tokio::test]
async fn test_validation_errors() {
    let fixture = TestFixture::new().await;

    // Register with an empty username
    let resp = fixture
        .client
        .post(fixture.url("/api/auth/register"))
        .json(&json!({
            "username": "",
            "password": "password123",
            "firstName": "No",
            "lastName": "Name",
            "email": "noname@example.com"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    // Malformed range dates
    let range_resp = fixture
        .client
        .get(fixture.url(
            "/api/workout-logs/user/1/range?startDate=junk&endDate=2025-06-30",
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(range_resp.status(), 400);
    let range_body: Value = range_resp.json().await.unwrap();
    assert_eq!(range_body["error"]["code"], "VALIDATION_ERROR");
}
