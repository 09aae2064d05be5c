use tracing::debug;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::form::WorkoutForm;
use crate::input::{parse_date, parse_distance};
use crate::model::workout::Workout;
use crate::repository::{MemoryWorkoutRepository, WorkoutRepository};
use crate::time::compare_desc;

/// What `add` did with a valid entry.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Created(Workout),
    /// Distance was added to the entry that already had this date.
    Merged(Workout),
}

impl AddOutcome {
    pub fn workout(&self) -> &Workout {
        match self {
            AddOutcome::Created(w) | AddOutcome::Merged(w) => w,
        }
    }
}

/// The workout collection and the rules for changing it.
///
/// At most one entry exists per date string. Adding to a date that is
/// already present accumulates distance into that entry.
pub struct WorkoutLog<R: WorkoutRepository = MemoryWorkoutRepository> {
    repo: R,
}

impl WorkoutLog<MemoryWorkoutRepository> {
    pub fn new() -> Self {
        Self::with_repository(MemoryWorkoutRepository::new())
    }

    /// The three entries the page used to open with.
    pub fn with_sample_data() -> Self {
        let mut log = Self::new();
        for (date, km) in [("18.07.19", 3.4), ("19.07.19", 14.2), ("20.07.19", 5.7)] {
            log.repo.insert(Workout::new(date.to_string(), km));
        }
        log
    }
}

impl Default for WorkoutLog<MemoryWorkoutRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: WorkoutRepository> WorkoutLog<R> {
    pub fn with_repository(repo: R) -> Self {
        Self { repo }
    }

    /// Validates both fields, then merges into the same-date entry or
    /// creates a new one. Nothing changes when validation fails.
    pub fn add(&mut self, raw_date: &str, raw_km: &str) -> Result<AddOutcome, ValidationError> {
        let date = parse_date(raw_date)?;
        let km = parse_distance(raw_km)?;

        if let Some(mut existing) = self.repo.find_by_date(&date) {
            let merged = existing.km + km;
            if !merged.is_finite() {
                return Err(ValidationError::InvalidDistance {
                    input: raw_km.to_string(),
                });
            }
            existing.km = merged;
            let updated = self.repo.update(&existing);
            debug_assert!(updated, "entry found by date must be updatable");
            debug!(id = %existing.id, date = %existing.date, km = existing.km, "merged workout");
            return Ok(AddOutcome::Merged(existing));
        }

        let workout = Workout::new(date, km);
        self.repo.insert(workout.clone());
        debug!(id = %workout.id, date = %workout.date, km = workout.km, "created workout");
        Ok(AddOutcome::Created(workout))
    }

    /// Removes the entry. Unknown ids are ignored.
    pub fn delete(&mut self, id: &Uuid) -> Option<Workout> {
        let removed = self.repo.delete(id);
        if let Some(w) = &removed {
            debug!(id = %w.id, date = %w.date, "deleted workout");
        }
        removed
    }

    /// Moves the entry back into the form: its fields are copied into
    /// `form` and the entry is deleted. Submitting the form re-adds it,
    /// merging if another entry now holds the same date.
    pub fn edit(&mut self, id: &Uuid, form: &mut WorkoutForm) -> Option<Workout> {
        let workout = self.repo.get(id)?;
        form.prefill(&workout);
        self.delete(id)
    }

    /// Replaces the distance of one entry in place. Date and id stay.
    pub fn update_distance(
        &mut self,
        id: &Uuid,
        raw_km: &str,
    ) -> Result<Option<Workout>, ValidationError> {
        let km = parse_distance(raw_km)?;
        let Some(mut workout) = self.repo.get(id) else {
            return Ok(None);
        };
        workout.km = km;
        let updated = self.repo.update(&workout);
        debug_assert!(updated, "entry found by id must be updatable");
        debug!(id = %workout.id, km = workout.km, "updated workout distance");
        Ok(Some(workout))
    }

    /// All entries, most recent calendar date first.
    ///
    /// Calendar-equal entries keep their storage order.
    pub fn sorted_descending(&self) -> Vec<Workout> {
        let mut workouts = self.repo.list();
        workouts.sort_by(|a, b| compare_desc(&a.date, &b.date));
        workouts
    }

    pub fn get(&self, id: &Uuid) -> Option<Workout> {
        self.repo.get(id)
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
