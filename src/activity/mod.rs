//! Activity model
//!
//! Every workout variant implements [`Activity`]. Distance and mean speed have
//! default implementations driven by the step length; calories have none, so
//! each variant has to provide its own formula.
//!
//! Derived values are recomputed on every call. Nothing is cached.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use std::fmt;

use crate::error::WorkoutError;
use crate::report::SummaryReport;
use crate::types::WorkoutKind;

/// Meters per kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes per hour
pub const MIN_IN_H: f64 = 60.0;

/// Default distance covered per action (one step), in meters
pub const LEN_STEP: f64 = 0.65;

/// Parameters shared by every workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionData {
    /// Steps or strokes counted by the sensor
    pub action_count: i64,
    /// Session length in hours. Must be nonzero.
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl SessionData {
    pub fn new(action_count: i64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }

    /// Read the three leading positional values. Arity is checked by the caller.
    fn from_leading(values: &[f64]) -> Result<Self, WorkoutError> {
        Ok(Self {
            action_count: count_value("action_count", values[0])?,
            duration_hours: values[1],
            weight_kg: values[2],
        })
    }
}

/// Calculation contract for a single workout
pub trait Activity: fmt::Debug + Send + Sync {
    /// Which registered workout this is
    fn kind(&self) -> WorkoutKind;

    /// Base parameters of the session
    fn session(&self) -> &SessionData;

    /// Distance covered per action, in meters
    fn step_length_m(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in kilometers
    fn distance_km(&self) -> f64 {
        self.session().action_count as f64 * self.step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.session().duration_hours
    }

    /// Calories burned (kcal)
    fn calories(&self) -> f64;

    /// Compute all statistics into a fresh report
    fn build_report(&self) -> SummaryReport {
        let report = SummaryReport::new(
            self.kind().label(),
            self.session().duration_hours,
            self.distance_km(),
            self.mean_speed_kmh(),
            self.calories(),
        );
        tracing::trace!(kind = %self.kind(), ?report, "built summary report");
        report
    }
}

/// Fail unless exactly `kind.arity()` values were supplied
fn check_arity(kind: WorkoutKind, values: &[f64]) -> Result<(), WorkoutError> {
    if values.len() != kind.arity() {
        return Err(WorkoutError::ArityMismatch {
            code: kind.code(),
            expected: kind.arity(),
            actual: values.len(),
        });
    }
    Ok(())
}

/// Exclusive magnitude bound of values representable as `i64`
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Convert a positional value into a whole count
fn count_value(field: &'static str, value: f64) -> Result<i64, WorkoutError> {
    if value.fract() == 0.0 && value >= -I64_BOUND && value < I64_BOUND {
        Ok(value as i64)
    } else {
        Err(WorkoutError::InvalidValue { field, value })
    }
}
