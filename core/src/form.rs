use crate::error::ValidationError;
use crate::model::workout::Workout;
use crate::repository::WorkoutRepository;
use crate::service::workout_log::{AddOutcome, WorkoutLog};

/// The two entry fields, as typed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WorkoutForm {
    pub date: String,
    pub km: String,
}

impl WorkoutForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.date.clear();
        self.km.clear();
    }

    pub fn prefill(&mut self, workout: &Workout) {
        self.date = workout.date.clone();
        self.km = workout.km.to_string();
    }

    /// Adds the typed entry to `log`. The fields are cleared only when the
    /// entry was accepted.
    pub fn submit<R: WorkoutRepository>(
        &mut self,
        log: &mut WorkoutLog<R>,
    ) -> Result<AddOutcome, ValidationError> {
        let outcome = log.add(&self.date, &self.km)?;
        self.clear();
        Ok(outcome)
    }
}
