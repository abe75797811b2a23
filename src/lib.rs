//! workout-stats - Workout statistics from sensor packages
//!
//! Turns raw `(workout code, values)` sensor packages into summary reports
//! through a small deterministic flow: dispatch → activity → report.
//!
//! ## Modules
//!
//! - **Activity Model**: running, sports walking and swimming calculations
//! - **Dispatch**: sensor code to activity constructor
//! - **Report**: fixed-shape summary and its one-line rendering
//! - **Packages / Pipeline**: reading packages and summarizing them in order

pub mod activity;
pub mod dispatch;
pub mod error;
pub mod package;
pub mod pipeline;
pub mod report;
pub mod types;

pub use activity::{Activity, Running, SportsWalking, Swimming};
pub use dispatch::create_activity;
pub use error::WorkoutError;
pub use package::{demo_packages, PackageReader, SensorPackage};
pub use pipeline::{render_packages, summarize, summarize_packages};
pub use report::SummaryReport;
pub use types::WorkoutKind;

/// Crate version, reported by the CLI
pub const STATS_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name reported by the CLI
pub const PRODUCER_NAME: &str = "workout-stats";
