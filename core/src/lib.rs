pub mod config;
pub mod error;
pub mod form;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;

pub use config::Settings;
pub use error::ValidationError;
pub use form::WorkoutForm;
pub use input::{parse_date, parse_distance, split_entry_arg};
pub use model::workout::Workout;
pub use repository::{MemoryWorkoutRepository, WorkoutRepository};
pub use service::workout_log::{AddOutcome, WorkoutLog};
pub use time::{calendar_date, compare_desc};
