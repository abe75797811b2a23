//! Sensor packages
//!
//! A package is one `(workout code, positional values)` pair as delivered by
//! the sensor. Packages can be read from a JSON array or from NDJSON.
//!
//! ```json
//! {"workout_type": "RUN", "data": [15000, 1, 75]}
//! ```

use serde::{Deserialize, Serialize};

use crate::activity::Activity;
use crate::dispatch::create_activity;
use crate::error::WorkoutError;

/// One sensor reading to be turned into an activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Workout code (`SWM`, `RUN` or `WLK`)
    pub workout_type: String,
    /// Positional values in constructor order
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Dispatch this package to its activity
    pub fn to_activity(&self) -> Result<Box<dyn Activity>, WorkoutError> {
        create_activity(&self.workout_type, &self.data)
    }
}

/// The three reference packages: one swim, one run, one walk
pub fn demo_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Reader for serialized sensor packages
pub struct PackageReader;

impl PackageReader {
    /// Parse a JSON string containing an array of packages
    pub fn parse_array(json: &str) -> Result<Vec<SensorPackage>, WorkoutError> {
        let packages: Vec<SensorPackage> = serde_json::from_str(json)?;
        Ok(packages)
    }

    /// Parse NDJSON (one package per line, blank lines ignored)
    pub fn parse_ndjson(ndjson: &str) -> Result<Vec<SensorPackage>, WorkoutError> {
        let mut packages = Vec::new();
        for (line_num, line) in ndjson.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match serde_json::from_str::<SensorPackage>(trimmed) {
                Ok(package) => packages.push(package),
                Err(e) => {
                    return Err(WorkoutError::ParseError(format!(
                        "Failed to parse line {}: {}",
                        line_num + 1,
                        e
                    )));
                }
            }
        }
        Ok(packages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_array() {
        let json = r#"[
            {"workout_type": "SWM", "data": [720, 1, 80, 25, 40]},
            {"workout_type": "RUN", "data": [15000, 1, 75]},
            {"workout_type": "WLK", "data": [9000, 1, 75, 180]}
        ]"#;

        let packages = PackageReader::parse_array(json).unwrap();
        assert_eq!(packages, demo_packages());
    }

    #[test]
    fn test_parse_ndjson_skips_blank_lines() {
        let ndjson = "{\"workout_type\": \"RUN\", \"data\": [15000, 1, 75]}\n\n   \n\
                      {\"workout_type\": \"WLK\", \"data\": [9000, 1, 75, 180]}\n";

        let packages = PackageReader::parse_ndjson(ndjson).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[1].workout_type, "WLK");
    }

    #[test]
    fn test_parse_ndjson_reports_line_number() {
        let ndjson = "{\"workout_type\": \"RUN\", \"data\": [15000, 1, 75]}\n\
                      {\"workout_type\": \"RUN\", \"data\": \"oops\"}\n";

        let err = PackageReader::parse_ndjson(ndjson).unwrap_err();
        match err {
            WorkoutError::ParseError(msg) => assert!(msg.contains("line 2"), "{msg}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_array_invalid_json() {
        assert!(matches!(
            PackageReader::parse_array("[{"),
            Err(WorkoutError::JsonError(_))
        ));
    }

    #[test]
    fn test_to_activity() {
        let package = SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]);
        let activity = package.to_activity().unwrap();
        assert!((activity.distance_km() - 9.75).abs() < 1e-9);
    }
}
