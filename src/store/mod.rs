//! In-memory entity store.
//!
//! All application data lives in per-entity collections keyed by
//! auto-increment integer ids. There is no persistence: state is lost on
//! restart. The store is constructed once at startup and injected into the
//! router state, so tests can build their own isolated instances.

mod repository;
mod seed;

pub use seed::seed_demo_data;

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{
    ClassEnrollment, ClassSchedule, Exercise, Food, MealPlan, Message, ProgressEntry, User,
    Workout, WorkoutExercise, WorkoutLog,
};

/// A single entity collection with a monotonically increasing id allocator.
///
/// Ids start at 1 and are never reused, so ascending-id iteration is
/// insertion order. Lookups and filters are linear scans, O(n) per call;
/// there are no secondary indexes at this data scale.
pub(crate) struct Collection<T> {
    items: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T: Clone> Collection<T> {
    fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Allocate the next id and store the record produced by `build`.
    pub(crate) fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let record = build(id);
        self.items.insert(id, record.clone());
        record
    }

    pub(crate) fn get(&self, id: i64) -> Option<T> {
        self.items.get(&id).cloned()
    }

    /// All records in insertion order.
    pub(crate) fn all(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    /// Apply an in-place mutation to the record with the given id.
    ///
    /// Returns the updated record, or `None` when the id is absent, in
    /// which case the collection is left unchanged.
    pub(crate) fn update(&mut self, id: i64, apply: impl FnOnce(&mut T)) -> Option<T> {
        let record = self.items.get_mut(&id)?;
        apply(record);
        Some(record.clone())
    }

    pub(crate) fn find(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.items
            .values()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// First match in ascending-id order.
    pub(crate) fn find_first(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.items.values().find(|record| predicate(record)).cloned()
    }
}

/// All collections behind one lock.
pub(crate) struct StoreInner {
    pub(crate) users: Collection<User>,
    pub(crate) workouts: Collection<Workout>,
    pub(crate) exercises: Collection<Exercise>,
    pub(crate) workout_exercises: Collection<WorkoutExercise>,
    pub(crate) foods: Collection<Food>,
    pub(crate) meal_plans: Collection<MealPlan>,
    pub(crate) workout_logs: Collection<WorkoutLog>,
    pub(crate) progress: Collection<ProgressEntry>,
    pub(crate) messages: Collection<Message>,
    pub(crate) class_schedules: Collection<ClassSchedule>,
    pub(crate) class_enrollments: Collection<ClassEnrollment>,
}

/// The in-memory store shared by all request handlers.
///
/// Every operation takes the lock, runs to completion without suspending,
/// and returns owned values, so each store method is atomic with respect to
/// every other.
pub struct Store {
    inner: RwLock<StoreInner>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                users: Collection::new(),
                workouts: Collection::new(),
                exercises: Collection::new(),
                workout_exercises: Collection::new(),
                foods: Collection::new(),
                meal_plans: Collection::new(),
                workout_logs: Collection::new(),
                progress: Collection::new(),
                messages: Collection::new(),
                class_schedules: Collection::new(),
                class_enrollments: Collection::new(),
            }),
        }
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
