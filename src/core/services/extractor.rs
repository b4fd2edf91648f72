//! Metric extraction
//!
//! Turns a parsed Clover document into a classified [`MetricSet`].
//!
//! The document is the generic tree produced by
//! [`crate::adapters::clover`]: attributes under `"$"`, child elements as
//! arrays under their tag name. The project totals live at
//! `coverage.project[0].metrics[0].$`.

use serde_json::{Map, Value};

use crate::core::models::{CoverageRates, MetricSet, RateMetric, Thresholds};
use crate::error::{CoverageError, Result};

use super::{classify, diff};

/// Optional inputs to [`extract`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions<'a> {
    /// Classification thresholds
    pub thresholds: Thresholds,
    /// Baseline to compare against
    pub baseline: Option<&'a MetricSet>,
    /// Percentage points of regression to forgive
    pub diff_tolerance: f64,
}

/// Extract, diff and classify the metrics of a coverage document
pub fn extract(doc: &Value, options: &ExtractOptions<'_>) -> Result<MetricSet> {
    let rates = read_rates(doc)?;
    let diff = diff(&rates, options.baseline.map(|b| &b.rates), options.diff_tolerance);
    let level = classify(&rates, &diff, &options.thresholds);
    log::debug!("lines {}% -> {level}", rates.lines.rate);
    Ok(MetricSet { rates, diff, level })
}

/// Read the four rate metrics from a coverage document
///
/// Clover names line coverage `statements` and statement coverage
/// `elements`; the mapping below follows that vocabulary.
pub fn read_rates(doc: &Value) -> Result<CoverageRates> {
    let data = metrics_record(doc)?;
    let metric = |total: &str, covered: &str| -> Result<RateMetric> {
        Ok(RateMetric::new(counter(data, total)?, counter(data, covered)?))
    };

    Ok(CoverageRates {
        statements: metric("elements", "coveredelements")?,
        lines: metric("statements", "coveredstatements")?,
        methods: metric("methods", "coveredmethods")?,
        branches: metric("conditionals", "coveredconditionals")?,
    })
}

fn metrics_record(doc: &Value) -> Result<&Map<String, Value>> {
    let coverage = doc.get("coverage").ok_or_else(|| malformed("missing `coverage` root"))?;
    let project = first(coverage, "project")?;
    let metrics = first(project, "metrics")?;
    metrics
        .get("$")
        .and_then(Value::as_object)
        .ok_or_else(|| malformed("`metrics` record has no attributes"))
}

fn first<'a>(node: &'a Value, key: &str) -> Result<&'a Value> {
    node.get(key)
        .and_then(Value::as_array)
        .and_then(|items| items.first())
        .ok_or_else(|| malformed(&format!("missing `{key}` element")))
}

fn malformed(message: &str) -> CoverageError {
    CoverageError::MalformedDocument(message.to_string())
}

fn counter(data: &Map<String, Value>, name: &str) -> Result<u64> {
    let invalid = |value: String| CoverageError::InvalidCounter {
        name: name.to_string(),
        value,
    };

    match data.get(name) {
        None => Err(invalid("<missing>".to_string())),
        Some(Value::String(raw)) => parse_counter(raw).ok_or_else(|| invalid(raw.clone())),
        Some(Value::Number(number)) => number
            .as_u64()
            .or_else(|| number.as_f64().and_then(integral))
            .ok_or_else(|| invalid(number.to_string())),
        Some(other) => Err(invalid(other.to_string())),
    }
}

fn parse_counter(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse::<u64>().ok().or_else(|| trimmed.parse::<f64>().ok().and_then(integral))
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn integral(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64)
        .then_some(value as u64)
}
