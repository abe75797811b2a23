//! Running workout.

use super::{check_arity, Activity, SessionData, MIN_IN_H, M_IN_KM};
use crate::error::WorkoutError;
use crate::types::WorkoutKind;

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

/// Running session measured in steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    session: SessionData,
}

impl Running {
    pub fn new(action_count: i64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            session: SessionData::new(action_count, duration_hours, weight_kg),
        }
    }

    /// Build from `(action_count, duration_hours, weight_kg)`.
    pub fn from_values(values: &[f64]) -> Result<Self, WorkoutError> {
        check_arity(WorkoutKind::Running, values)?;
        Ok(Self {
            session: SessionData::from_leading(values)?,
        })
    }
}

impl Activity for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn session(&self) -> &SessionData {
        &self.session
    }

    fn calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh() + CALORIES_MEAN_SPEED_SHIFT)
            * self.session.weight_kg
            / M_IN_KM
            * self.session.duration_hours
            * MIN_IN_H
    }
}
