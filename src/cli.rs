//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands;
use coverage_monitor::output::{OutputMode, ReportFormat};

/// coverage-monitor - Clover coverage metrics for code review
#[derive(Parser, Debug)]
#[command(
    name = "coverage-monitor",
    version,
    about = "Clover coverage metrics for code review",
    long_about = "Compute coverage rates from a Clover report, compare them with a baseline\n\
                  and report the result as a commit status and a pull request comment."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute coverage for a report and print it locally
    Report {
        /// Clover report to read
        clover_file: PathBuf,

        /// Baseline Clover report to compare against
        #[arg(short, long)]
        base: Option<PathBuf>,

        /// Line rate below which coverage is red
        #[arg(long, default_value_t = 50.0)]
        threshold_alert: f64,

        /// Line rate below which coverage is yellow
        #[arg(long, default_value_t = 90.0)]
        threshold_warning: f64,

        /// Percentage points of regression to forgive
        #[arg(long, default_value_t = 0.0)]
        diff_tolerance: f64,

        /// Heading and status context
        #[arg(long, default_value = coverage_monitor::config::DEFAULT_CONTEXT)]
        context: String,

        /// What to print: the comment or the commit status
        #[arg(short, long, value_enum, default_value_t = Format::Markdown)]
        format: Format,
    },

    /// Run as a CI step: inputs from INPUT_* variables and the workflow event
    Run {
        /// TOML file with default inputs
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Scratch directory for downloaded baselines
        #[arg(long, default_value = ".coverage-monitor")]
        scratch: PathBuf,
    },

    /// Show version
    Version,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Pull request comment
    Markdown,
    /// Commit status line
    Status,
}

impl From<Format> for ReportFormat {
    fn from(value: Format) -> Self {
        match value {
            Format::Markdown => Self::Markdown,
            Format::Status => Self::Status,
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Report {
            clover_file,
            base,
            threshold_alert,
            threshold_warning,
            diff_tolerance,
            context,
            format,
        }) => commands::report(
            &commands::ReportArgs {
                clover_file,
                base,
                thresholds: coverage_monitor::Thresholds::new(threshold_alert, threshold_warning),
                diff_tolerance,
                context,
            },
            output_mode,
            format.into(),
        ),
        Some(Command::Run { config, scratch }) => {
            commands::run(config.as_deref(), &scratch, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("coverage-monitor v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("coverage-monitor v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'coverage-monitor --help' for usage");
                println!("Run 'coverage-monitor report clover.xml' to try it on a report");
            }
            Ok(())
        },
    }
}
