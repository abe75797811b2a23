//! Pipeline orchestration
//!
//! Runs sensor packages through the full flow: dispatch → activity → report.
//! Output order always matches input order.

use crate::dispatch::create_activity;
use crate::error::WorkoutError;
use crate::package::SensorPackage;
use crate::report::SummaryReport;

/// Compute the summary report for a single `(code, data)` pair.
///
/// # Example
/// ```
/// let report = workout_stats::summarize("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])?;
/// assert_eq!(
///     report.render(),
///     "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
///      Avg speed: 1.000 km/h; Calories: 336.000."
/// );
/// # Ok::<(), workout_stats::WorkoutError>(())
/// ```
pub fn summarize(code: &str, data: &[f64]) -> Result<SummaryReport, WorkoutError> {
    let activity = create_activity(code, data)?;
    Ok(activity.build_report())
}

/// Summarize every package, stopping at the first failure.
pub fn summarize_packages(packages: &[SensorPackage]) -> Result<Vec<SummaryReport>, WorkoutError> {
    packages
        .iter()
        .map(|package| summarize(&package.workout_type, &package.data))
        .collect()
}

/// Summarize every package and render one line per package.
pub fn render_packages(packages: &[SensorPackage]) -> Result<Vec<String>, WorkoutError> {
    Ok(summarize_packages(packages)?
        .iter()
        .map(SummaryReport::render)
        .collect())
}
