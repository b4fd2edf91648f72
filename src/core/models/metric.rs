//! Rate metrics and metric sets

use serde::{Deserialize, Serialize};

use super::{DiffResult, Level};

/// Round a percentage to two decimals, half away from zero
///
/// A negative zero result is normalized to `0.0`.
#[must_use]
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Covered over total units for one coverage dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateMetric {
    /// Number of units
    pub total: u64,
    /// Number of covered units (not guarded against exceeding `total`)
    pub covered: u64,
    /// Percentage, rounded to two decimals
    pub rate: f64,
}

impl RateMetric {
    /// Build a metric and compute its rate
    #[must_use]
    pub fn new(total: u64, covered: u64) -> Self {
        Self {
            total,
            covered,
            rate: rate(total, covered),
        }
    }
}

/// Coverage percentage for `covered` out of `total`, `0` when `total` is `0`
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn rate(total: u64, covered: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(covered as f64 / total as f64 * 100.0)
}

/// The four rate metrics of a coverage report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageRates {
    /// Line coverage (Clover `statements`)
    pub lines: RateMetric,
    /// Statement coverage (Clover `elements`)
    pub statements: RateMetric,
    /// Method coverage
    pub methods: RateMetric,
    /// Branch coverage (Clover `conditionals`)
    pub branches: RateMetric,
}

/// A classified coverage result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    /// The rate metrics
    #[serde(flatten)]
    pub rates: CoverageRates,
    /// Deltas against the baseline
    pub diff: DiffResult,
    /// Derived severity
    pub level: Level,
}

impl MetricSet {
    /// Line coverage metric
    #[must_use]
    pub const fn lines(&self) -> &RateMetric {
        &self.rates.lines
    }

    /// Statement coverage metric
    #[must_use]
    pub const fn statements(&self) -> &RateMetric {
        &self.rates.statements
    }

    /// Method coverage metric
    #[must_use]
    pub const fn methods(&self) -> &RateMetric {
        &self.rates.methods
    }

    /// Branch coverage metric
    #[must_use]
    pub const fn branches(&self) -> &RateMetric {
        &self.rates.branches
    }
}
