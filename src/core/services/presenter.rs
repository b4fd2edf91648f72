//! Rendering of classified metrics
//!
//! Badge URL, commit status and pull request comment. Every function here
//! is total for a well-formed [`MetricSet`].

use std::fmt::Write;

use crate::core::models::{Level, MetricSet, RateMetric, StatusPayload, StatusState};

const BADGE_BASE: &str = "https://img.shields.io/static/v1?label=coverage";
const HEADER_PREFIX: &str = "<!-- coverage-monitor-action:";

/// Shields badge URL showing the rounded line rate
///
/// The colour is the level name. shields.io has no `critical` colour and
/// falls back to grey for it.
#[must_use]
pub fn badge_url(metric: &MetricSet) -> String {
    format!(
        "{BADGE_BASE}&message={}%&color={}",
        metric.lines().rate.round(),
        metric.level
    )
}

/// Commit status describing the result
#[must_use]
pub fn status_payload(
    metric: &MetricSet,
    target_url: Option<&str>,
    status_context: &str,
) -> StatusPayload {
    let rate = metric.lines().rate;
    let description = match metric.level {
        Level::Critical => "Critical: Coverage has dropped".to_string(),
        Level::Red => format!("Error: Too low coverage - {rate}%"),
        Level::Yellow => format!("Warning: low coverage - {rate}%"),
        Level::Green => format!("Success: Coverage - {rate}%"),
    };
    let state = if metric.level.is_failure() {
        StatusState::Failure
    } else {
        StatusState::Success
    };

    StatusPayload {
        state,
        description,
        target_url: target_url.map(str::to_string),
        context: status_context.to_string(),
    }
}

/// Marker placed on the first line of every comment
///
/// Previously posted comments are found again by this prefix.
#[must_use]
pub fn comment_header(comment_context: &str) -> String {
    format!("{HEADER_PREFIX} {comment_context} -->")
}

/// Markdown comment with the coverage table
#[must_use]
pub fn comment_body(metric: &MetricSet, comment_context: &str) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", comment_header(comment_context));
    let _ = writeln!(output, "## {comment_context}{}", celebration(metric));
    let _ = writeln!(output);
    let _ = writeln!(output, "|  Totals | ![Coverage]({}) | Diff |", badge_url(metric));
    let _ = writeln!(output, "| :-- | -- | --: |");

    let rows = [
        ("Lines", metric.lines(), metric.diff.lines),
        ("Branches", metric.branches(), metric.diff.branches),
        ("Statements", metric.statements(), metric.diff.statements),
        ("Methods", metric.methods(), metric.diff.methods),
    ];
    for (label, rate, delta) in rows {
        let _ = writeln!(output, "| {label}: | {} | {delta}% |", info(rate));
    }
    output
}

#[allow(clippy::float_cmp)]
fn celebration(metric: &MetricSet) -> &'static str {
    if metric.lines().rate == 100.0 { " 🎉" } else { "" }
}

fn info(metric: &RateMetric) -> String {
    format!("{}% ( {} / {} )", metric.rate, metric.covered, metric.total)
}
