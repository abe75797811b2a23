//! Pool swimming workout.

use super::{check_arity, count_value, Activity, SessionData, M_IN_KM};
use crate::error::WorkoutError;
use crate::types::WorkoutKind;

/// Distance covered per stroke, in meters
const LEN_STROKE: f64 = 1.38;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Swimming session in a pool.
///
/// Mean speed comes from the pool length and lap count rather than the stroke
/// count. The stroke count still drives the reported distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    session: SessionData,
    pub pool_length_m: f64,
    pub lap_count: i64,
}

impl Swimming {
    pub fn new(
        action_count: i64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        lap_count: i64,
    ) -> Self {
        Self {
            session: SessionData::new(action_count, duration_hours, weight_kg),
            pool_length_m,
            lap_count,
        }
    }

    /// Build from `(action_count, duration_hours, weight_kg, pool_length_m, lap_count)`.
    pub fn from_values(values: &[f64]) -> Result<Self, WorkoutError> {
        check_arity(WorkoutKind::Swimming, values)?;
        Ok(Self {
            session: SessionData::from_leading(values)?,
            pool_length_m: values[3],
            lap_count: count_value("lap_count", values[4])?,
        })
    }
}

impl Activity for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn session(&self) -> &SessionData {
        &self.session
    }

    fn step_length_m(&self) -> f64 {
        LEN_STROKE
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.lap_count as f64 / M_IN_KM / self.session.duration_hours
    }

    fn calories(&self) -> f64 {
        (self.mean_speed_kmh() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.session.weight_kg
            * self.session.duration_hours
    }
}
