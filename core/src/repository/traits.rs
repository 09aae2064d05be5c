use uuid::Uuid;

use crate::model::workout::Workout;

pub trait WorkoutRepository {
    /// All entries in storage order.
    fn list(&self) -> Vec<Workout>;
    fn len(&self) -> usize;
    fn get(&self, id: &Uuid) -> Option<Workout>;
    /// Exact string match on the date key.
    fn find_by_date(&self, date: &str) -> Option<Workout>;
    fn insert(&mut self, workout: Workout);
    /// Returns false when no entry has `workout.id`.
    fn update(&mut self, workout: &Workout) -> bool;
    fn delete(&mut self, id: &Uuid) -> Option<Workout>;
}
