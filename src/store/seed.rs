//! Demo data for local development.
//!
//! Populates a fresh store with a small set of users, a workout and
//! exercise catalog, foods, a meal plan, recent activity and two classes.
//! Everything goes through the public store API, so the seed exercises the
//! same create paths as clients do.

use chrono::{Days, Duration, Utc};

use crate::auth;
use crate::errors::AppError;
use crate::models::{
    MealEntry, NewClassEnrollment, NewClassSchedule, NewExercise, NewFood, NewMealPlan,
    NewMessage, NewProgressEntry, NewUser, NewWorkout, NewWorkoutExercise, NewWorkoutLog,
};

use super::Store;

pub fn seed_demo_data(store: &Store) -> Result<(), AppError> {
    // All demo accounts share one password; hash it once.
    let password = auth::hash_password("password123")?;

    let user = |username: &str, first: &str, last: &str, trainer: bool, plan: &str| NewUser {
        username: username.to_string(),
        password: password.clone(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}@example.com", first.to_lowercase()),
        profile_image: None,
        weight: None,
        height: None,
        age: None,
        gender: None,
        goal: None,
        is_trainer: Some(trainer),
        plan: Some(plan.to_string()),
    };

    let rahul = store.create_user(user("rahul_sharma", "Rahul", "Sharma", false, "Premium"));
    let priya = store.create_user(user("priya_patel", "Priya", "Patel", true, "Trainer"));
    let amit = store.create_user(user("amit_kumar", "Amit", "Kumar", true, "Trainer"));
    let neha = store.create_user(user("neha_gupta", "Neha", "Gupta", false, "Premium"));
    let vikram = store.create_user(user("vikram_singh", "Vikram", "Singh", false, "Basic"));

    // Exercise catalog.
    let exercise = |name: &str, description: &str, group: &str, equipment: Option<&str>, level: &str| NewExercise {
        name: name.to_string(),
        description: description.to_string(),
        muscle_group: group.to_string(),
        equipment_required: equipment.map(str::to_string),
        difficulty_level: level.to_string(),
        image_url: None,
        video_url: None,
    };

    let squat = store.create_exercise(exercise(
        "Barbell Squat",
        "A compound exercise that targets the quadriceps, hamstrings, and glutes",
        "legs",
        Some("barbell"),
        "intermediate",
    ));
    let bench = store.create_exercise(exercise(
        "Barbell Bench Press",
        "A compound exercise that targets the chest, shoulders, and triceps",
        "chest",
        Some("barbell"),
        "intermediate",
    ));
    let deadlift = store.create_exercise(exercise(
        "Barbell Deadlift",
        "A compound exercise that targets the posterior chain",
        "back",
        Some("barbell"),
        "intermediate",
    ));
    let swing = store.create_exercise(exercise(
        "Kettlebell Swing",
        "A dynamic exercise that targets the posterior chain and core",
        "full_body",
        Some("kettlebell"),
        "intermediate",
    ));
    store.create_exercise(exercise(
        "Push-up",
        "A bodyweight exercise that targets the chest and arms",
        "chest",
        Some("none"),
        "beginner",
    ));
    store.create_exercise(exercise(
        "Plank",
        "A core stability exercise",
        "core",
        Some("none"),
        "beginner",
    ));

    // Workouts.
    let workout = |name: &str, description: &str, duration: i32, difficulty: &str, equipment: &[&str], muscles: &[&str]| NewWorkout {
        name: name.to_string(),
        description: description.to_string(),
        duration,
        difficulty: difficulty.to_string(),
        equipment_required: Some(equipment.iter().map(|s| s.to_string()).collect()),
        target_muscle_groups: Some(muscles.iter().map(|s| s.to_string()).collect()),
        image_url: None,
    };

    let barbell_strength = store.create_workout(workout(
        "Barbell Strength",
        "A full-body barbell workout focusing on compound movements",
        60,
        "intermediate",
        &["barbell"],
        &["legs", "chest", "back"],
    ));
    let kettlebell_power = store.create_workout(workout(
        "Kettlebell Power",
        "A dynamic kettlebell workout focusing on power and endurance",
        45,
        "intermediate",
        &["kettlebell"],
        &["full_body", "core"],
    ));
    store.create_workout(workout(
        "Bodyweight Basics",
        "A no-equipment workout focusing on fundamental movements",
        30,
        "beginner",
        &["none"],
        &["chest", "core"],
    ));

    for (exercise_id, sets, reps, rest) in [
        (squat.id, 4, 8, 90),
        (bench.id, 4, 8, 90),
        (deadlift.id, 4, 6, 120),
    ] {
        store.add_workout_exercise(NewWorkoutExercise {
            workout_id: barbell_strength.id,
            exercise_id,
            sets,
            reps,
            rest_time: Some(rest),
        });
    }
    store.add_workout_exercise(NewWorkoutExercise {
        workout_id: kettlebell_power.id,
        exercise_id: swing.id,
        sets: 4,
        reps: 15,
        rest_time: Some(60),
    });

    // Foods.
    let food = |name: &str, calories: i32, protein: i32, carbs: i32, fat: i32, fiber: i32, category: &str| NewFood {
        name: name.to_string(),
        calories,
        protein,
        carbs,
        fat,
        fiber: Some(fiber),
        category: category.to_string(),
        image_url: None,
    };

    let oats = store.create_food(food("Masala Oats with Vegetables", 250, 10, 40, 5, 6, "breakfast"));
    let rice = store.create_food(food("Brown Rice with Dal and Mixed Vegetables", 400, 15, 70, 4, 8, "lunch"));
    let curry = store.create_food(food("Vegetable Curry with Chapati", 450, 12, 65, 10, 7, "dinner"));

    let today = Utc::now().date_naive();

    store.create_meal_plan(NewMealPlan {
        user_id: rahul.id,
        date: today,
        meals: vec![
            MealEntry {
                food_id: oats.id,
                time: "8:00 AM".to_string(),
                meal_type: "breakfast".to_string(),
                quantity: 1,
            },
            MealEntry {
                food_id: rice.id,
                time: "1:00 PM".to_string(),
                meal_type: "lunch".to_string(),
                quantity: 1,
            },
            MealEntry {
                food_id: curry.id,
                time: "8:00 PM".to_string(),
                meal_type: "dinner".to_string(),
                quantity: 1,
            },
        ],
    });

    // Recent workout activity for the leaderboard and dashboard widgets.
    for (user_id, days_ago, duration) in [
        (rahul.id, 2, 45),
        (rahul.id, 4, 50),
        (rahul.id, 5, 45),
        (neha.id, 1, 60),
        (neha.id, 3, 40),
        (vikram.id, 6, 35),
    ] {
        store.create_workout_log(NewWorkoutLog {
            user_id,
            workout_id: barbell_strength.id,
            date: today - Days::new(days_ago),
            duration,
            calories_burned: Some(duration * 7),
            completed: Some(true),
        });
    }

    // Weight trend for the progress chart.
    for (weeks_ago, weight) in [(4u64, 78.0), (3, 77.5), (2, 76.8), (1, 76.0), (0, 75.5)] {
        store.create_progress_entry(NewProgressEntry {
            user_id: rahul.id,
            date: today - Days::new(weeks_ago * 7),
            weight: Some(weight),
            body_fat: None,
            notes: None,
        });
    }

    store.create_message(NewMessage {
        sender_id: priya.id,
        receiver_id: rahul.id,
        message: "Great job on completing your leg workout yesterday! I've updated your plan for next week with progressive overload.".to_string(),
    });
    store.create_message(NewMessage {
        sender_id: amit.id,
        receiver_id: rahul.id,
        message: "Remember to increase your water intake during these hot months.".to_string(),
    });

    let tomorrow_morning = Utc::now() + Duration::days(1);
    let yoga = store.create_class(NewClassSchedule {
        trainer_id: priya.id,
        class_name: "Morning Yoga".to_string(),
        description: Some("Start your day with energizing yoga flows".to_string()),
        start_time: tomorrow_morning,
        end_time: tomorrow_morning + Duration::hours(1),
        max_participants: 10,
    });
    store.create_class(NewClassSchedule {
        trainer_id: amit.id,
        class_name: "HIIT Workout".to_string(),
        description: Some("High intensity interval training for maximum calorie burn".to_string()),
        start_time: tomorrow_morning + Duration::hours(1),
        end_time: tomorrow_morning + Duration::minutes(105),
        max_participants: 15,
    });

    store.enroll(NewClassEnrollment {
        class_id: yoga.id,
        user_id: rahul.id,
    })?;

    Ok(())
}
