//! Summary report
//!
//! A [`SummaryReport`] is the computed result of one activity. It is built
//! once, rendered, and dropped.

use serde::Serialize;
use std::fmt;

/// Statistics for a single workout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    /// Workout label, e.g. "Running"
    pub activity_label: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    /// Calories burned (kcal)
    pub calories: f64,
}

impl SummaryReport {
    pub fn new(
        activity_label: impl Into<String>,
        duration_hours: f64,
        distance_km: f64,
        mean_speed_kmh: f64,
        calories: f64,
    ) -> Self {
        Self {
            activity_label: activity_label.into(),
            duration_hours,
            distance_km,
            mean_speed_kmh,
            calories,
        }
    }

    /// Render as a single summary line
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories: {:.3}.",
            self.activity_label,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Pull out the numeric fields of a rendered line
    fn numeric_fields(line: &str) -> Vec<String> {
        line.trim_end_matches('.')
            .split("; ")
            .skip(1)
            .map(|part| {
                let value = part.split(": ").nth(1).unwrap();
                value.split(' ').next().unwrap().to_string()
            })
            .collect()
    }

    #[test]
    fn test_render() {
        let report = SummaryReport::new("Swimming", 1.0, 0.9936, 1.0, 336.0);
        assert_eq!(
            report.render(),
            "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Avg speed: 1.000 km/h; Calories: 336.000."
        );
    }

    #[test]
    fn test_render_always_three_decimals() {
        let reports = [
            SummaryReport::new("Running", 0.25, 12345678.9, -3.0, 1e-9),
            SummaryReport::new("Running", -1.5, 0.0, 1e7, -0.0004),
            SummaryReport::new("Running", 2.0, 1.23456, 7.0, 123.4567),
        ];

        for report in reports {
            let fields = numeric_fields(&report.render());
            assert_eq!(fields.len(), 4);
            for field in fields {
                let (_, decimals) = field.split_once('.').unwrap();
                assert_eq!(decimals.len(), 3, "field {field}");
                assert!(field.parse::<f64>().is_ok());
            }
        }
    }

    #[test]
    fn test_display_matches_render() {
        let report = SummaryReport::new("SportsWalking", 1.0, 5.85, 5.85, 349.2517);
        assert_eq!(format!("{report}"), report.render());
    }

    #[test]
    fn test_serialize() {
        let report = SummaryReport::new("Running", 1.0, 9.75, 9.75, 797.805);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["activity_label"], "Running");
        assert_eq!(json["calories"], 797.805);
    }
}
