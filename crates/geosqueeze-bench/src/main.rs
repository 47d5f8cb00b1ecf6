//! geosqueeze-bench: CLI tool for simplification parameter experimentation.
//!
//! Runs the turn-angle simplifier on a polyline read from a JSON file (or a
//! generated unit circle) and prints diagnostics. Useful for:
//!
//! - Tuning the turn tolerance and coordinate precision for a dataset
//! - Measuring elimination time across repeated runs
//! - Watching what the elimination loop does (`-v` / `-vv`)
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin geosqueeze-bench -- [OPTIONS] [INPUT]
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::f64::consts::PI;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::{ArgAction, Parser};
use geosqueeze::{Clock, Point, Polyline, SqueezeConfig, SqueezeDiagnostics};
use log::{LevelFilter, Log, Metadata, Record};

/// Turn-angle polyline simplification diagnostics.
///
/// Simplifies a polyline with configurable parameters and prints point
/// counts, elimination counters and timing.
#[derive(Parser)]
#[command(name = "geosqueeze-bench", version)]
struct Cli {
    /// Path to a JSON polyline: an array of `{"x": .., "y": ..}` objects.
    #[arg(required_unless_present = "circle", conflicts_with = "circle")]
    input: Option<PathBuf>,

    /// Generate a closed unit circle with this many sides instead of
    /// reading an input file.
    #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<u32>::new().range(3..))]
    circle: Option<u32>,

    /// Maximum turn angle in degrees for a vertex to be removed.
    #[arg(long, default_value_t = SqueezeConfig::DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Decimal digits to round coordinates to before simplifying.
    #[arg(long, default_value_t = SqueezeConfig::DEFAULT_PRECISION, allow_negative_numbers = true)]
    precision: i32,

    /// Full simplification config as a JSON string.
    ///
    /// When provided, `--tolerance` and `--precision` are ignored.
    /// The JSON must be a valid `SqueezeConfig` serialization.
    #[arg(long)]
    config_json: Option<String>,

    /// Number of runs for averaging.
    #[arg(long, default_value_t = 1, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    runs: usize,

    /// Output diagnostics as JSON instead of a human-readable report.
    #[arg(long)]
    json: bool,

    /// Write the simplified polyline as JSON to this file.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log engine activity to stderr (`-v` debug, `-vv` trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Build a [`SqueezeConfig`] from CLI arguments.
///
/// If `--config-json` is provided, the JSON is parsed directly and the
/// individual parameter flags are ignored.
fn config_from_cli(cli: &Cli) -> Result<SqueezeConfig, String> {
    if let Some(ref json) = cli.config_json {
        return serde_json::from_str(json).map_err(|e| format!("Error parsing --config-json: {e}"));
    }

    Ok(SqueezeConfig::new(cli.tolerance, cli.precision))
}

/// Load the input polyline, or generate the circle.
fn input_from_cli(cli: &Cli) -> Result<(String, Polyline), String> {
    if let Some(sides) = cli.circle {
        return Ok((format!("circle ({sides} sides)"), circle(sides)));
    }

    let Some(ref path) = cli.input else {
        return Err("Error: no input file given".to_string());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading {}: {e}", path.display()))?;
    let polyline = serde_json::from_str(&text)
        .map_err(|e| format!("Error parsing {}: {e}", path.display()))?;
    Ok((path.display().to_string(), polyline))
}

/// A unit circle sampled at `sides` equal steps, closed back onto its start.
fn circle(sides: u32) -> Polyline {
    (0..=sides)
        .map(|i| {
            let t = 2.0 * PI * f64::from(i) / f64::from(sides);
            Point::new(t.cos(), t.sin())
        })
        .collect::<Vec<_>>()
        .into()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose > 0 {
        StderrLogger::install(if cli.verbose > 1 {
            LevelFilter::Trace
        } else {
            LevelFilter::Debug
        });
    }

    let config = match config_from_cli(&cli) {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let (source, polyline) = match input_from_cli(&cli) {
        Ok(input) => input,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    eprintln!("Input: {source} ({} points)", polyline.len());
    eprintln!("Config: {config:#?}");
    eprintln!("Runs: {}", cli.runs);
    eprintln!();

    let mut all_diagnostics = Vec::with_capacity(cli.runs);

    for run in 0..cli.runs {
        if cli.runs > 1 {
            eprintln!("--- Run {}/{} ---", run + 1, cli.runs);
        }

        match geosqueeze::simplify_with_diagnostics(&polyline, &config, &StdClock) {
            Ok((simplified, diagnostics)) => {
                if cli.json {
                    match serde_json::to_string_pretty(&diagnostics) {
                        Ok(json) => println!("{json}"),
                        Err(e) => {
                            eprintln!("Error serializing diagnostics: {e}");
                            return ExitCode::FAILURE;
                        }
                    }
                } else {
                    println!("{}", diagnostics.report());
                }

                // Write the simplified polyline on the first run only.
                if run == 0
                    && let Some(ref output_path) = cli.output
                    && let Err(msg) = write_polyline(output_path, &simplified)
                {
                    eprintln!("{msg}");
                    return ExitCode::FAILURE;
                }

                all_diagnostics.push(diagnostics);
            }
            Err(e) => {
                eprintln!("Simplification error: {e}");
                return ExitCode::FAILURE;
            }
        }

        if cli.runs > 1 {
            eprintln!();
        }
    }

    if cli.runs > 1 {
        print_multi_run_summary(&all_diagnostics);
    }

    ExitCode::SUCCESS
}

fn write_polyline(path: &Path, polyline: &Polyline) -> Result<(), String> {
    let json = serde_json::to_string_pretty(polyline)
        .map_err(|e| format!("Error serializing polyline: {e}"))?;
    std::fs::write(path, &json)
        .map_err(|e| format!("Error writing polyline to {}: {e}", path.display()))?;
    eprintln!(
        "Polyline written to {} ({} points, {} bytes)",
        path.display(),
        polyline.len(),
        json.len(),
    );
    Ok(())
}

/// [`Clock`] implementation backed by [`std::time::Instant`].
struct StdClock;

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed(&self, since: &Instant) -> Duration {
        since.elapsed()
    }
}

/// Writes log records to stderr as `[LEVEL target] message`.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl StderrLogger {
    fn install(level: LevelFilter) {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Print aggregated statistics across multiple runs.
#[allow(clippy::cast_precision_loss)]
fn print_multi_run_summary(all_diagnostics: &[SqueezeDiagnostics]) {
    debug_assert!(!all_diagnostics.is_empty(), "no diagnostics to summarize");

    println!();
    println!(
        "Summary ({} runs)\n{}",
        all_diagnostics.len(),
        "=".repeat(60),
    );

    let Some(first) = all_diagnostics.first() else {
        println!("Warning: no diagnostics to summarize");
        return;
    };

    let durations: Vec<f64> = all_diagnostics
        .iter()
        .map(|d| d.duration.as_secs_f64() * 1000.0)
        .collect();

    let min = durations.iter().copied().reduce(f64::min).unwrap_or(0.0);
    let max = durations.iter().copied().reduce(f64::max).unwrap_or(0.0);
    let mean = durations.iter().sum::<f64>() / durations.len() as f64;

    println!("Duration: min={min:.3}ms  mean={mean:.3}ms  max={max:.3}ms");
    println!(
        "Points: {} -> {}  removed={}",
        first.points_before, first.points_after, first.stats.removed,
    );
}
