//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::models::{Level, MetricSet, StatusPayload};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// What the `report` command prints in human mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// The pull request comment
    #[default]
    Markdown,
    /// The commit status
    Status,
}

/// Result of a local coverage report
#[derive(Debug, Serialize)]
pub struct ReportResult {
    /// The classified metrics
    pub metric: MetricSet,
    /// Status that would be posted
    pub status: StatusPayload,
    /// Comment that would be posted
    pub comment: String,
    /// Badge URL
    pub badge_url: String,
    /// Whether a baseline was compared
    pub compared: bool,
}

impl ReportResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode, format: ReportFormat) {
        match mode {
            OutputMode::Human => self.render_human(format),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self, format: ReportFormat) {
        match format {
            ReportFormat::Markdown => print!("{}", self.comment),
            ReportFormat::Status => {
                println!("[{}] {}", level_tag(self.metric.level), self.status.description);
                if !self.compared {
                    println!("No baseline; diff not computed.");
                }
            },
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of the run workflow
#[derive(Debug, Serialize)]
pub struct RunResult {
    /// Level of the processed report, if one was processed
    pub level: Option<Level>,
    /// Whether a commit status was posted
    pub status_posted: bool,
    /// Whether a comment was posted
    pub comment_posted: bool,
    /// Why the run stopped early, if it did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<String>,
}

impl RunResult {
    /// A run that stopped before processing the report
    #[must_use]
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self {
            level: None,
            status_posted: false,
            comment_posted: false,
            skipped: Some(reason.into()),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        if let Some(reason) = &self.skipped {
            println!("Skipped: {reason}");
            return;
        }
        if let Some(level) = self.level {
            println!("Coverage level: {}", level_tag(level));
        }
        if self.status_posted {
            println!("Posted commit status.");
        }
        if self.comment_posted {
            println!("Posted pull request comment.");
        }
    }
}

/// Colored uppercase level name
#[must_use]
pub fn level_tag(level: Level) -> ColoredString {
    let tag = level.as_str().to_uppercase();
    match level {
        Level::Critical => tag.red().bold(),
        Level::Red => tag.red(),
        Level::Yellow => tag.yellow(),
        Level::Green => tag.green(),
    }
}
