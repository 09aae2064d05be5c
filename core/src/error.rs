//! Validation errors surfaced to the user when an entry is rejected.

use thiserror::Error;

/// The single error kind of the workout log.
///
/// Raised before any state is touched, so a rejected add never leaves a
/// partial change behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid date '{input}': expected DD.MM.YY")]
    InvalidDate { input: String },

    #[error("Invalid distance '{input}': expected a number greater than 0")]
    InvalidDistance { input: String },
}
