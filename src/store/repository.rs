//! Store operations: per-entity CRUD, denormalizing joins and derived
//! aggregations (leaderboard, filters).
//!
//! Lookups by id return `Option`; joins that hit a dangling foreign key
//! return a referential-integrity error rather than partial rows. The store
//! assumes its inputs were validated by the route layer and never fails on
//! valid input.

use chrono::{Days, NaiveDate, Utc};
use std::collections::BTreeMap;

use crate::errors::AppError;
use crate::models::{
    ClassEnrollment, ClassSchedule, ClassWithTrainer, EnrollmentWithClass, Exercise, Food,
    InboxMessage, LeaderboardEntry, LoggedWorkout, MealPlan, MealPlanPatch, Message,
    NewClassEnrollment, NewClassSchedule, NewExercise, NewFood, NewMealPlan, NewMessage,
    NewProgressEntry, NewUser, NewWorkout, NewWorkoutExercise, NewWorkoutLog, ProgressEntry, User,
    UserPatch, Workout, WorkoutExercise, WorkoutExerciseDetail, WorkoutLog, WorkoutLogPatch,
};

use super::Store;

/// Length of the trailing leaderboard window, in calendar days.
const LEADERBOARD_WINDOW_DAYS: u64 = 30;

impl Store {
    // ==================== USER OPERATIONS ====================

    pub fn get_user(&self, id: i64) -> Option<User> {
        self.read().users.get(id)
    }

    pub fn find_user_by_username(&self, username: &str) -> Option<User> {
        self.read().users.find_first(|user| user.username == username)
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.read().users.find_first(|user| user.email == email)
    }

    /// Create a user. The password must already be hashed by the caller.
    pub fn create_user(&self, new: NewUser) -> User {
        self.write().users.insert_with(|id| User {
            id,
            username: new.username,
            password: new.password,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            profile_image: new.profile_image,
            weight: new.weight,
            height: new.height,
            age: new.age,
            gender: new.gender,
            goal: new.goal,
            is_trainer: new.is_trainer,
            plan: new.plan,
        })
    }

    pub fn update_user(&self, id: i64, patch: UserPatch) -> Option<User> {
        self.write().users.update(id, |user| patch.apply(user))
    }

    // ==================== WORKOUT OPERATIONS ====================

    pub fn all_workouts(&self) -> Vec<Workout> {
        self.read().workouts.all()
    }

    pub fn get_workout(&self, id: i64) -> Option<Workout> {
        self.read().workouts.get(id)
    }

    pub fn create_workout(&self, new: NewWorkout) -> Workout {
        self.write().workouts.insert_with(|id| Workout {
            id,
            name: new.name,
            description: new.description,
            duration: new.duration,
            difficulty: new.difficulty,
            equipment_required: new.equipment_required,
            target_muscle_groups: new.target_muscle_groups,
            image_url: new.image_url,
        })
    }

    /// Workouts matching the requested equipment and muscle-group tags.
    ///
    /// A workout matches when each non-empty criterion intersects the
    /// workout's corresponding tag set; an empty criterion matches
    /// everything. Both criteria must hold.
    pub fn recommend_workouts(&self, equipment: &[String], muscle_groups: &[String]) -> Vec<Workout> {
        self.read().workouts.find(|workout| {
            let has_equipment = equipment.is_empty()
                || workout
                    .equipment_required
                    .as_deref()
                    .unwrap_or_default()
                    .iter()
                    .any(|tag| equipment.contains(tag));
            let targets_muscles = muscle_groups.is_empty()
                || workout
                    .target_muscle_groups
                    .as_deref()
                    .unwrap_or_default()
                    .iter()
                    .any(|tag| muscle_groups.contains(tag));
            has_equipment && targets_muscles
        })
    }

    // ==================== EXERCISE OPERATIONS ====================

    pub fn all_exercises(&self) -> Vec<Exercise> {
        self.read().exercises.all()
    }

    pub fn get_exercise(&self, id: i64) -> Option<Exercise> {
        self.read().exercises.get(id)
    }

    pub fn create_exercise(&self, new: NewExercise) -> Exercise {
        self.write().exercises.insert_with(|id| Exercise {
            id,
            name: new.name,
            description: new.description,
            muscle_group: new.muscle_group,
            equipment_required: new.equipment_required,
            difficulty_level: new.difficulty_level,
            image_url: new.image_url,
            video_url: new.video_url,
        })
    }

    pub fn exercises_by_muscle_group(&self, muscle_group: &str) -> Vec<Exercise> {
        self.read()
            .exercises
            .find(|exercise| exercise.muscle_group == muscle_group)
    }

    // ==================== WORKOUT EXERCISE OPERATIONS ====================

    /// The exercises of a workout, each resolved against the exercise
    /// collection.
    pub fn workout_exercises(
        &self,
        workout_id: i64,
    ) -> Result<Vec<WorkoutExerciseDetail>, AppError> {
        let inner = self.read();
        inner
            .workout_exercises
            .find(|link| link.workout_id == workout_id)
            .into_iter()
            .map(|link| {
                let exercise = inner.exercises.get(link.exercise_id).ok_or_else(|| {
                    AppError::ReferentialIntegrity(format!(
                        "Exercise {} not found",
                        link.exercise_id
                    ))
                })?;
                Ok(WorkoutExerciseDetail { link, exercise })
            })
            .collect()
    }

    pub fn add_workout_exercise(&self, new: NewWorkoutExercise) -> WorkoutExercise {
        self.write().workout_exercises.insert_with(|id| WorkoutExercise {
            id,
            workout_id: new.workout_id,
            exercise_id: new.exercise_id,
            sets: new.sets,
            reps: new.reps,
            rest_time: new.rest_time,
        })
    }

    // ==================== FOOD OPERATIONS ====================

    pub fn all_foods(&self) -> Vec<Food> {
        self.read().foods.all()
    }

    pub fn get_food(&self, id: i64) -> Option<Food> {
        self.read().foods.get(id)
    }

    pub fn create_food(&self, new: NewFood) -> Food {
        self.write().foods.insert_with(|id| Food {
            id,
            name: new.name,
            calories: new.calories,
            protein: new.protein,
            carbs: new.carbs,
            fat: new.fat,
            fiber: new.fiber,
            category: new.category,
            image_url: new.image_url,
        })
    }

    pub fn foods_by_category(&self, category: &str) -> Vec<Food> {
        self.read().foods.find(|food| food.category == category)
    }

    // ==================== MEAL PLAN OPERATIONS ====================

    /// The unique meal plan for (user, date); the lowest id wins should the
    /// one-per-day convention ever be violated.
    pub fn meal_plan_for(&self, user_id: i64, date: NaiveDate) -> Option<MealPlan> {
        self.read()
            .meal_plans
            .find_first(|plan| plan.user_id == user_id && plan.date == date)
    }

    pub fn create_meal_plan(&self, new: NewMealPlan) -> MealPlan {
        self.write().meal_plans.insert_with(|id| MealPlan {
            id,
            user_id: new.user_id,
            date: new.date,
            meals: new.meals,
        })
    }

    pub fn update_meal_plan(&self, id: i64, patch: MealPlanPatch) -> Option<MealPlan> {
        self.write().meal_plans.update(id, |plan| patch.apply(plan))
    }

    // ==================== WORKOUT LOG OPERATIONS ====================

    /// A user's workout logs, each resolved against the workout collection.
    pub fn user_workout_logs(&self, user_id: i64) -> Result<Vec<LoggedWorkout>, AppError> {
        let inner = self.read();
        inner
            .workout_logs
            .find(|log| log.user_id == user_id)
            .into_iter()
            .map(|log| {
                let workout = inner.workouts.get(log.workout_id).ok_or_else(|| {
                    AppError::ReferentialIntegrity(format!("Workout {} not found", log.workout_id))
                })?;
                Ok(LoggedWorkout { log, workout })
            })
            .collect()
    }

    pub fn create_workout_log(&self, new: NewWorkoutLog) -> WorkoutLog {
        self.write().workout_logs.insert_with(|id| WorkoutLog {
            id,
            user_id: new.user_id,
            workout_id: new.workout_id,
            date: new.date,
            duration: new.duration,
            calories_burned: new.calories_burned,
            completed: new.completed,
        })
    }

    /// Logs for a user with `start <= date <= end`, inclusive on both ends.
    pub fn workout_logs_in_range(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<WorkoutLog> {
        self.read()
            .workout_logs
            .find(|log| log.user_id == user_id && log.date >= start && log.date <= end)
    }

    pub fn update_workout_log(&self, id: i64, patch: WorkoutLogPatch) -> Option<WorkoutLog> {
        self.write().workout_logs.update(id, |log| patch.apply(log))
    }

    // ==================== PROGRESS OPERATIONS ====================

    pub fn user_progress(&self, user_id: i64) -> Vec<ProgressEntry> {
        self.read().progress.find(|entry| entry.user_id == user_id)
    }

    pub fn create_progress_entry(&self, new: NewProgressEntry) -> ProgressEntry {
        self.write().progress.insert_with(|id| ProgressEntry {
            id,
            user_id: new.user_id,
            date: new.date,
            weight: new.weight,
            body_fat: new.body_fat,
            notes: new.notes,
        })
    }

    /// Progress entries for a user with `start <= date <= end`, inclusive
    /// on both ends.
    pub fn progress_in_range(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<ProgressEntry> {
        self.read()
            .progress
            .find(|entry| entry.user_id == user_id && entry.date >= start && entry.date <= end)
    }

    // ==================== MESSAGE OPERATIONS ====================

    /// A user's inbox: messages addressed to them, each with the sender
    /// resolved.
    pub fn inbox(&self, user_id: i64) -> Result<Vec<InboxMessage>, AppError> {
        let inner = self.read();
        inner
            .messages
            .find(|message| message.receiver_id == user_id)
            .into_iter()
            .map(|message| {
                let sender = inner.users.get(message.sender_id).ok_or_else(|| {
                    AppError::ReferentialIntegrity(format!(
                        "Sender {} not found",
                        message.sender_id
                    ))
                })?;
                Ok(InboxMessage {
                    message,
                    sender: sender.into(),
                })
            })
            .collect()
    }

    /// Create a message with a server-assigned timestamp and `read = false`.
    pub fn create_message(&self, new: NewMessage) -> Message {
        self.write().messages.insert_with(|id| Message {
            id,
            sender_id: new.sender_id,
            receiver_id: new.receiver_id,
            message: new.message,
            timestamp: Utc::now(),
            read: false,
        })
    }

    /// Flip the read flag to true, leaving every other field unchanged.
    pub fn mark_message_read(&self, id: i64) -> Option<Message> {
        self.write().messages.update(id, |message| message.read = true)
    }

    // ==================== CLASS SCHEDULE OPERATIONS ====================

    /// All class schedules with their trainers resolved.
    pub fn all_classes(&self) -> Result<Vec<ClassWithTrainer>, AppError> {
        let inner = self.read();
        inner
            .class_schedules
            .all()
            .into_iter()
            .map(|schedule| {
                let trainer = inner.users.get(schedule.trainer_id).ok_or_else(|| {
                    AppError::ReferentialIntegrity(format!(
                        "Trainer {} not found",
                        schedule.trainer_id
                    ))
                })?;
                Ok(ClassWithTrainer {
                    schedule,
                    trainer: trainer.into(),
                })
            })
            .collect()
    }

    pub fn get_class(&self, id: i64) -> Option<ClassSchedule> {
        self.read().class_schedules.get(id)
    }

    pub fn create_class(&self, new: NewClassSchedule) -> ClassSchedule {
        self.write().class_schedules.insert_with(|id| ClassSchedule {
            id,
            trainer_id: new.trainer_id,
            class_name: new.class_name,
            description: new.description,
            start_time: new.start_time,
            end_time: new.end_time,
            max_participants: new.max_participants,
            current_participants: 0,
        })
    }

    pub fn trainer_classes(&self, trainer_id: i64) -> Vec<ClassSchedule> {
        self.read()
            .class_schedules
            .find(|schedule| schedule.trainer_id == trainer_id)
    }

    // ==================== ENROLLMENT OPERATIONS ====================

    /// Enroll a user in a class.
    ///
    /// Capacity is enforced here, under the same write lock that inserts
    /// the enrollment row and increments the participant counter, so the
    /// counter and the enrollment set cannot diverge.
    pub fn enroll(&self, new: NewClassEnrollment) -> Result<ClassEnrollment, AppError> {
        let mut inner = self.write();

        let class = inner
            .class_schedules
            .get(new.class_id)
            .ok_or_else(|| AppError::NotFound(format!("Class {} not found", new.class_id)))?;

        if class.current_participants >= class.max_participants {
            return Err(AppError::ClassFull("Class is full".to_string()));
        }

        let enrollment = inner.class_enrollments.insert_with(|id| ClassEnrollment {
            id,
            class_id: new.class_id,
            user_id: new.user_id,
            enrollment_date: Utc::now(),
        });

        inner
            .class_schedules
            .update(new.class_id, |class| class.current_participants += 1);

        Ok(enrollment)
    }

    /// A user's enrollments, each with the class resolved.
    pub fn user_enrollments(&self, user_id: i64) -> Result<Vec<EnrollmentWithClass>, AppError> {
        let inner = self.read();
        inner
            .class_enrollments
            .find(|enrollment| enrollment.user_id == user_id)
            .into_iter()
            .map(|enrollment| {
                let class = inner.class_schedules.get(enrollment.class_id).ok_or_else(|| {
                    AppError::ReferentialIntegrity(format!(
                        "Class {} not found",
                        enrollment.class_id
                    ))
                })?;
                Ok(EnrollmentWithClass { enrollment, class })
            })
            .collect()
    }

    // ==================== LEADERBOARD ====================

    /// Rank users by fitness points over the trailing 30-day window ending
    /// at `today`.
    pub fn leaderboard(&self, today: NaiveDate) -> Vec<LeaderboardEntry> {
        let cutoff = today - Days::new(LEADERBOARD_WINDOW_DAYS);
        self.leaderboard_since(cutoff)
    }

    /// Rank users by fitness points earned since `cutoff` (inclusive).
    ///
    /// Only completed logs qualify; a user's points are the sum of the
    /// durations of their qualifying logs. Users that cannot be resolved
    /// are skipped (the leaderboard is best-effort). Ordering is points
    /// descending, ties broken by ascending user id.
    pub fn leaderboard_since(&self, cutoff: NaiveDate) -> Vec<LeaderboardEntry> {
        let inner = self.read();

        let mut points_by_user: BTreeMap<i64, f64> = BTreeMap::new();
        for log in inner
            .workout_logs
            .find(|log| log.completed == Some(true) && log.date >= cutoff)
        {
            *points_by_user.entry(log.user_id).or_insert(0.0) += f64::from(log.duration);
        }

        let mut entries: Vec<LeaderboardEntry> = points_by_user
            .into_iter()
            .filter_map(|(user_id, points)| {
                let user = inner.users.get(user_id)?;
                Some(LeaderboardEntry {
                    user: user.into(),
                    points,
                })
            })
            .collect();

        entries.sort_by(|a, b| {
            b.points
                .total_cmp(&a.points)
                .then(a.user.id.cmp(&b.user.id))
        });
        entries
    }
}
