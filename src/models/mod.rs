//! Data models for the FitTrack application.
//!
//! These models match the frontend TypeScript interfaces exactly for seamless interoperability.

mod class;
mod exercise;
mod food;
mod meal_plan;
mod message;
mod progress;
mod user;
mod workout;
mod workout_log;

pub use class::*;
pub use exercise::*;
pub use food::*;
pub use meal_plan::*;
pub use message::*;
pub use progress::*;
pub use user::*;
pub use workout::*;
pub use workout_log::*;
