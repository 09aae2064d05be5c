use uuid::Uuid;

use crate::model::workout::Workout;
use crate::repository::traits::WorkoutRepository;

/// Process-memory storage. Newest insert comes first in `list`.
#[derive(Debug, Default, Clone)]
pub struct MemoryWorkoutRepository {
    workouts: Vec<Workout>,
}

impl MemoryWorkoutRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorkoutRepository for MemoryWorkoutRepository {
    fn list(&self) -> Vec<Workout> {
        self.workouts.clone()
    }

    fn len(&self) -> usize {
        self.workouts.len()
    }

    fn get(&self, id: &Uuid) -> Option<Workout> {
        self.workouts.iter().find(|w| w.id == *id).cloned()
    }

    fn find_by_date(&self, date: &str) -> Option<Workout> {
        self.workouts.iter().find(|w| w.date == date).cloned()
    }

    fn insert(&mut self, workout: Workout) {
        self.workouts.insert(0, workout);
    }

    fn update(&mut self, workout: &Workout) -> bool {
        if let Some(pos) = self.workouts.iter().position(|w| w.id == workout.id) {
            self.workouts[pos] = workout.clone();
            true
        } else {
            false
        }
    }

    fn delete(&mut self, id: &Uuid) -> Option<Workout> {
        let pos = self.workouts.iter().position(|w| w.id == *id)?;
        Some(self.workouts.remove(pos))
    }
}
