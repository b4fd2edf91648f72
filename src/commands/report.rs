//! Compute coverage for a local report

use std::path::PathBuf;

use coverage_monitor::adapters::CloverFile;
use coverage_monitor::core::ports::DocumentSource;
use coverage_monitor::core::services::{
    ExtractOptions, badge_url, comment_body, extract, status_payload,
};
use coverage_monitor::output::{OutputMode, ReportFormat, ReportResult};
use coverage_monitor::Thresholds;

/// Inputs of the `report` command
#[derive(Debug)]
pub struct ReportArgs {
    /// Clover report to read
    pub clover_file: PathBuf,
    /// Optional baseline report
    pub base: Option<PathBuf>,
    /// Classifier thresholds
    pub thresholds: Thresholds,
    /// Percentage points of regression to forgive
    pub diff_tolerance: f64,
    /// Heading and status context
    pub context: String,
}

/// Print the coverage of a report, optionally compared with a baseline
pub fn report(args: &ReportArgs, mode: OutputMode, format: ReportFormat) -> anyhow::Result<()> {
    let source = CloverFile;
    let current = source.load(&args.clover_file)?;
    let baseline = match &args.base {
        Some(path) => Some(extract(&source.load(path)?, &ExtractOptions::default())?),
        None => None,
    };

    let options = ExtractOptions {
        thresholds: args.thresholds,
        baseline: baseline.as_ref(),
        diff_tolerance: args.diff_tolerance,
    };
    let metric = extract(&current, &options)?;

    let result = ReportResult {
        status: status_payload(&metric, None, &args.context),
        comment: comment_body(&metric, &args.context),
        badge_url: badge_url(&metric),
        compared: baseline.is_some(),
        metric,
    };
    result.render(mode, format);
    Ok(())
}
