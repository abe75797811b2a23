//! Core types shared across the crate
//!
//! `WorkoutKind` is the static registry of known workout codes. Every other
//! module resolves codes, labels and parameter counts through it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::WorkoutError;

/// Workout category identified by a three-letter sensor code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    #[serde(rename = "SWM")]
    Swimming,
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    SportsWalking,
}

impl WorkoutKind {
    /// All registered kinds, in registration order
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Sensor code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "SWM",
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
        }
    }

    /// Label shown in summary reports
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "Swimming",
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
        }
    }

    /// Number of positional values the constructor takes
    pub fn arity(&self) -> usize {
        match self {
            WorkoutKind::Swimming => 5,
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
        }
    }

    /// Names of the positional values, in constructor order
    pub fn parameters(&self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Swimming => &[
                "action_count",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "lap_count",
            ],
            WorkoutKind::Running => &["action_count", "duration_hours", "weight_kg"],
            WorkoutKind::SportsWalking => {
                &["action_count", "duration_hours", "weight_kg", "height_cm"]
            }
        }
    }

    /// Resolve a sensor code. Matching is exact and case-sensitive.
    pub fn from_code(code: &str) -> Result<Self, WorkoutError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| WorkoutError::UnknownWorkoutCode(code.to_string()))
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_registered() {
        assert_eq!(WorkoutKind::from_code("SWM").unwrap(), WorkoutKind::Swimming);
        assert_eq!(WorkoutKind::from_code("RUN").unwrap(), WorkoutKind::Running);
        assert_eq!(
            WorkoutKind::from_code("WLK").unwrap(),
            WorkoutKind::SportsWalking
        );
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        for code in ["swm", "Run", "", " RUN", "WALK"] {
            assert!(matches!(
                WorkoutKind::from_code(code),
                Err(WorkoutError::UnknownWorkoutCode(c)) if c == code
            ));
        }
    }

    #[test]
    fn test_arity_matches_parameters() {
        for kind in WorkoutKind::ALL {
            assert_eq!(kind.arity(), kind.parameters().len());
        }
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&WorkoutKind::SportsWalking).unwrap();
        assert_eq!(json, "\"WLK\"");

        let kind: WorkoutKind = serde_json::from_str("\"SWM\"").unwrap();
        assert_eq!(kind, WorkoutKind::Swimming);
    }
}
