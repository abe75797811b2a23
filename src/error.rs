//! Error types for workout-stats

use thiserror::Error;

/// Errors that can occur while dispatching or computing a workout
#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("Unknown workout code: {0:?}")]
    UnknownWorkoutCode(String),

    #[error("Workout {code} expects {expected} values, got {actual}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },

    #[error("Failed to parse sensor package: {0}")]
    ParseError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}
