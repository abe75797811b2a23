//! Workout dispatch
//!
//! Maps a sensor code onto the matching [`Activity`] constructor and spreads
//! the positional sensor values into it.

use crate::activity::{Activity, Running, SportsWalking, Swimming};
use crate::error::WorkoutError;
use crate::types::WorkoutKind;

/// Construct the activity registered for `code` from positional `data`.
///
/// # Errors
/// * [`WorkoutError::UnknownWorkoutCode`] if `code` is not `SWM`, `RUN` or `WLK`
/// * [`WorkoutError::ArityMismatch`] if `data` has the wrong length
/// * [`WorkoutError::InvalidValue`] if a count is not a whole number
///
/// # Example
/// ```
/// use workout_stats::{create_activity, Activity};
///
/// let running = create_activity("RUN", &[15000.0, 1.0, 75.0])?;
/// assert_eq!(running.build_report().activity_label, "Running");
/// # Ok::<(), workout_stats::WorkoutError>(())
/// ```
pub fn create_activity(code: &str, data: &[f64]) -> Result<Box<dyn Activity>, WorkoutError> {
    let kind = WorkoutKind::from_code(code)?;
    let activity = build_activity(kind, data)?;
    tracing::debug!(code, values = data.len(), "dispatched workout");
    Ok(activity)
}

/// Construct an activity of a known kind.
fn build_activity(kind: WorkoutKind, data: &[f64]) -> Result<Box<dyn Activity>, WorkoutError> {
    Ok(match kind {
        WorkoutKind::Swimming => Box::new(Swimming::from_values(data)?),
        WorkoutKind::Running => Box::new(Running::from_values(data)?),
        WorkoutKind::SportsWalking => Box::new(SportsWalking::from_values(data)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_is_total_over_registered_codes() {
        let cases: [(&str, &[f64]); 3] = [
            ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
            ("RUN", &[15000.0, 1.0, 75.0]),
            ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
        ];

        for (code, data) in cases {
            let activity = create_activity(code, data).unwrap();
            assert_eq!(activity.kind().code(), code);
        }
    }

    #[test]
    fn test_unknown_codes() {
        for code in ["", "swm", "Wlk", "BIKE", "RUN "] {
            let err = create_activity(code, &[15000.0, 1.0, 75.0]).unwrap_err();
            assert!(
                matches!(err, WorkoutError::UnknownWorkoutCode(ref c) if c == code),
                "unexpected error for {code:?}: {err}"
            );
        }
    }

    #[test]
    fn test_arity_mismatch_for_every_kind() {
        for kind in WorkoutKind::ALL {
            let too_few = vec![1.0; kind.arity() - 1];
            let too_many = vec![1.0; kind.arity() + 1];

            for data in [too_few, too_many] {
                let err = create_activity(kind.code(), &data).unwrap_err();
                assert!(matches!(
                    err,
                    WorkoutError::ArityMismatch { expected, actual, .. }
                        if expected == kind.arity() && actual == data.len()
                ));
            }
        }
    }

    #[test]
    fn test_sign_and_magnitude_are_not_validated() {
        let cases: [(&str, &[f64]); 4] = [
            ("RUN", &[-100.0, 1.0, 75.0]),
            ("RUN", &[1e12, 1.0, 75.0]),
            ("SWM", &[720.0, 1.0, 80.0, 25.0, -40.0]),
            ("RUN", &[100.0, 1.0, -75.0]),
        ];

        for (code, data) in cases {
            let report = create_activity(code, data).unwrap().build_report();
            assert!(report.render().starts_with("Workout type: "));
        }
    }

    #[test]
    fn test_dispatched_values_match_direct_construction() {
        let dispatched = create_activity("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        let direct = SportsWalking::new(9000, 1.0, 75.0, 180.0);

        assert_eq!(dispatched.build_report(), direct.build_report());
    }

    #[test]
    fn test_swimming_report_through_dispatch() {
        let swim = create_activity("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        let report = swim.build_report();

        assert!((report.mean_speed_kmh - 1.0).abs() < 1e-9);
        assert!((report.calories - 336.0).abs() < 1e-9);
        assert!((report.distance_km - 0.9936).abs() < 1e-9);
    }
}
