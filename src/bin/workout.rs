//! Workout CLI - Command-line driver for workout-stats
//!
//! Commands:
//! - summarize: Summarize sensor packages from a file or stdin
//! - demo: Summarize the built-in reference packages
//! - codes: List registered workout codes

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use workout_stats::{
    demo_packages, summarize, PackageReader, SensorPackage, SummaryReport, WorkoutError,
    WorkoutKind, PRODUCER_NAME, STATS_VERSION,
};

/// Workout - compute distance, speed and calories from sensor packages
#[derive(Parser)]
#[command(name = "workout")]
#[command(version = STATS_VERSION)]
#[command(about = "Summarize workout sensor packages", long_about = None)]
struct Cli {
    /// Log progress to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize sensor packages
    Summarize {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,

        /// Skip packages that fail instead of aborting
        #[arg(long)]
        skip_invalid: bool,
    },

    /// Summarize the built-in reference packages
    Demo {
        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,
    },

    /// List registered workout codes
    Codes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// Newline-delimited JSON (one package per line)
    Ndjson,
    /// JSON array of packages
    Json,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// One summary line per package
    Text,
    /// Newline-delimited JSON (one report per line)
    Ndjson,
    /// JSON array of reports
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), WorkoutCliError> {
    match cli.command {
        Commands::Summarize {
            input,
            output,
            input_format,
            output_format,
            skip_invalid,
        } => cmd_summarize(
            &input,
            output.as_deref(),
            input_format,
            output_format,
            skip_invalid,
        ),

        Commands::Demo { output_format } => cmd_demo(output_format),

        Commands::Codes { json } => cmd_codes(json),
    }
}

fn cmd_summarize(
    input: &Path,
    output: Option<&Path>,
    input_format: InputFormat,
    output_format: OutputFormat,
    skip_invalid: bool,
) -> Result<(), WorkoutCliError> {
    let input_data = if input.to_string_lossy() == "-" {
        if atty::is(atty::Stream::Stdin) {
            tracing::warn!("reading packages from an interactive terminal, end input with Ctrl-D");
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };

    let packages = match input_format {
        InputFormat::Ndjson => PackageReader::parse_ndjson(&input_data)?,
        InputFormat::Json => PackageReader::parse_array(&input_data)?,
    };

    if packages.is_empty() {
        return Err(WorkoutCliError::NoPackages);
    }
    tracing::info!(count = packages.len(), "read sensor packages");

    let reports = summarize_all(&packages, skip_invalid)?;
    let output_data = format_output(&reports, &output_format)?;

    match output {
        Some(path) => fs::write(path, output_data)?,
        None => {
            let mut stdout = io::stdout();
            write!(stdout, "{}", output_data)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn cmd_demo(output_format: OutputFormat) -> Result<(), WorkoutCliError> {
    let reports = summarize_all(&demo_packages(), false)?;
    print!("{}", format_output(&reports, &output_format)?);
    Ok(())
}

fn cmd_codes(json: bool) -> Result<(), WorkoutCliError> {
    let listing = CodeListing {
        producer: PRODUCER_NAME.to_string(),
        version: STATS_VERSION.to_string(),
        workouts: WorkoutKind::ALL
            .iter()
            .map(|kind| CodeEntry {
                code: kind.code(),
                label: kind.label(),
                parameters: kind.parameters().to_vec(),
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        println!("Registered workouts ({} {})", listing.producer, listing.version);
        println!("====================");
        for entry in &listing.workouts {
            println!(
                "  {}  {:<14} ({})",
                entry.code,
                entry.label,
                entry.parameters.join(", ")
            );
        }
    }

    Ok(())
}

// Helper functions

/// Summarize packages in order. With `skip_invalid`, failures are logged and dropped.
fn summarize_all(
    packages: &[SensorPackage],
    skip_invalid: bool,
) -> Result<Vec<SummaryReport>, WorkoutCliError> {
    let mut reports = Vec::with_capacity(packages.len());

    for (index, package) in packages.iter().enumerate() {
        match summarize(&package.workout_type, &package.data) {
            Ok(report) => reports.push(report),
            Err(e) if skip_invalid => {
                tracing::warn!(index, workout_type = %package.workout_type, error = %e, "skipping package");
            }
            Err(e) => return Err(WorkoutCliError::Package { index, source: e }),
        }
    }

    if reports.is_empty() {
        return Err(WorkoutCliError::NoReports);
    }
    Ok(reports)
}

fn format_output(
    reports: &[SummaryReport],
    format: &OutputFormat,
) -> Result<String, WorkoutCliError> {
    match format {
        OutputFormat::Text => {
            let lines: Vec<String> = reports.iter().map(SummaryReport::render).collect();
            Ok(lines.join("\n") + "\n")
        }
        OutputFormat::Ndjson => {
            let mut lines: Vec<String> = Vec::new();
            for report in reports {
                lines.push(serde_json::to_string(report)?);
            }
            Ok(lines.join("\n") + "\n")
        }
        OutputFormat::Json => Ok(serde_json::to_string(reports)? + "\n"),
        OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(reports)? + "\n"),
    }
}

// Error handling

#[derive(Debug)]
enum WorkoutCliError {
    Io(io::Error),
    Input(WorkoutError),
    Json(serde_json::Error),
    Package { index: usize, source: WorkoutError },
    NoPackages,
    NoReports,
}

impl From<io::Error> for WorkoutCliError {
    fn from(e: io::Error) -> Self {
        WorkoutCliError::Io(e)
    }
}

impl From<WorkoutError> for WorkoutCliError {
    fn from(e: WorkoutError) -> Self {
        WorkoutCliError::Input(e)
    }
}

impl From<serde_json::Error> for WorkoutCliError {
    fn from(e: serde_json::Error) -> Self {
        WorkoutCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<WorkoutCliError> for CliError {
    fn from(e: WorkoutCliError) -> Self {
        match e {
            WorkoutCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            WorkoutCliError::Input(e) => CliError {
                code: "PARSE_ERROR".to_string(),
                message: e.to_string(),
                hint: Some(
                    "Each package needs a workout_type and a numeric data array".to_string(),
                ),
            },
            WorkoutCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: None,
            },
            WorkoutCliError::Package { index, source } => {
                let (code, hint) = match source {
                    WorkoutError::UnknownWorkoutCode(_) => (
                        "UNKNOWN_WORKOUT_CODE",
                        "Run 'workout codes' to list registered codes",
                    ),
                    WorkoutError::ArityMismatch { .. } => (
                        "ARITY_MISMATCH",
                        "Run 'workout codes' to see the expected values per workout",
                    ),
                    _ => ("INVALID_PACKAGE", "Use --skip-invalid to ignore bad packages"),
                };
                CliError {
                    code: code.to_string(),
                    message: format!("Package {}: {}", index, source),
                    hint: Some(hint.to_string()),
                }
            }
            WorkoutCliError::NoPackages => CliError {
                code: "NO_PACKAGES".to_string(),
                message: "No packages found in input".to_string(),
                hint: Some("Ensure input file is not empty".to_string()),
            },
            WorkoutCliError::NoReports => CliError {
                code: "NO_REPORTS".to_string(),
                message: "Every package was skipped".to_string(),
                hint: Some("Run with --verbose to see why".to_string()),
            },
        }
    }
}

// Report types

#[derive(serde::Serialize)]
struct CodeListing {
    producer: String,
    version: String,
    workouts: Vec<CodeEntry>,
}

#[derive(serde::Serialize)]
struct CodeEntry {
    code: &'static str,
    label: &'static str,
    parameters: Vec<&'static str>,
}
