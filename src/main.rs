//! FitTrack Backend
//!
//! A REST backend for a fitness-tracking application backed by an in-memory store.

mod api;
mod auth;
mod config;
mod errors;
mod models;
mod store;

use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use store::Store;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting FitTrack Backend");
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize the in-memory store
    let store = Arc::new(Store::new());

    if config.seed_demo {
        store::seed_demo_data(&store)?;
        tracing::info!("Seeded demo data");
    }

    // Create application state
    let state = AppState { store };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Auth
        .route("/auth/register", post(api::register))
        .route("/auth/login", post(api::login))
        // Users
        .route("/users/{id}", get(api::get_user))
        .route("/users/{id}", patch(api::update_user))
        // Workouts
        .route("/workouts", get(api::list_workouts))
        .route("/workouts", post(api::create_workout))
        .route("/workouts/recommend", post(api::recommend_workouts))
        .route("/workouts/{id}", get(api::get_workout))
        .route("/workouts/{id}/exercises", get(api::list_workout_exercises))
        // Workout exercises
        .route("/workout-exercises", post(api::add_workout_exercise))
        // Exercises
        .route("/exercises", get(api::list_exercises))
        .route("/exercises", post(api::create_exercise))
        .route("/exercises/{id}", get(api::get_exercise))
        // Foods
        .route("/foods", get(api::list_foods))
        .route("/foods", post(api::create_food))
        .route("/foods/{id}", get(api::get_food))
        // Meal plans
        .route("/meal-plans", post(api::create_meal_plan))
        .route("/meal-plans/{id}/today", get(api::todays_meal_plan))
        .route("/meal-plans/{id}", patch(api::update_meal_plan))
        // Workout logs
        .route("/workout-logs", post(api::create_workout_log))
        .route("/workout-logs/user/{userId}", get(api::list_user_workout_logs))
        .route(
            "/workout-logs/user/{userId}/range",
            get(api::workout_logs_in_range),
        )
        .route("/workout-logs/{id}/complete", patch(api::complete_workout_log))
        // Progress
        .route("/progress", post(api::create_progress_entry))
        .route("/progress/user/{userId}", get(api::list_user_progress))
        .route("/progress/user/{userId}/range", get(api::progress_in_range))
        // Messages
        .route("/messages", post(api::create_message))
        .route("/messages/user/{userId}", get(api::list_user_messages))
        .route("/messages/{id}/read", patch(api::mark_message_read))
        // Class schedules
        .route("/class-schedules", get(api::list_classes))
        .route("/class-schedules", post(api::create_class))
        .route("/class-schedules/{id}", get(api::get_class_schedule))
        .route(
            "/class-schedules/trainer/{trainerId}",
            get(api::list_trainer_classes),
        )
        // Class enrollments
        .route("/class-enrollments", post(api::enroll_in_class))
        .route(
            "/class-enrollments/user/{userId}",
            get(api::list_user_enrollments),
        )
        // Leaderboard
        .route("/leaderboard", get(api::get_leaderboard));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
