//! Sports walking workout.

use super::{check_arity, Activity, SessionData, MIN_IN_H};
use crate::error::WorkoutError;
use crate::types::WorkoutKind;

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
/// km/h to m/s
const KMH_IN_MSEC: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

/// Walking session where the calorie estimate also depends on height.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    session: SessionData,
    pub height_cm: f64,
}

impl SportsWalking {
    pub fn new(action_count: i64, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            session: SessionData::new(action_count, duration_hours, weight_kg),
            height_cm,
        }
    }

    /// Build from `(action_count, duration_hours, weight_kg, height_cm)`.
    pub fn from_values(values: &[f64]) -> Result<Self, WorkoutError> {
        check_arity(WorkoutKind::SportsWalking, values)?;
        Ok(Self {
            session: SessionData::from_leading(values)?,
            height_cm: values[3],
        })
    }
}

impl Activity for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn session(&self) -> &SessionData {
        &self.session
    }

    fn calories(&self) -> f64 {
        let weight = self.session.weight_kg;
        let speed_ms = self.mean_speed_kmh() * KMH_IN_MSEC;

        (CALORIES_WEIGHT_MULTIPLIER * weight
            + (speed_ms.powi(2) / (self.height_cm / CM_IN_M))
                * CALORIES_SPEED_HEIGHT_MULTIPLIER
                * weight)
            * self.session.duration_hours
            * MIN_IN_H
    }
}
