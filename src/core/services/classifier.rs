//! Level classification

use crate::core::models::{CoverageRates, DiffResult, Level, Thresholds};

/// Classify a rate set and its diff into a [`Level`]
///
/// Rules, first match wins:
///
/// 1. any regression against the baseline is [`Level::Critical`]
/// 2. a line rate below `thresholds.alert` is [`Level::Red`]
/// 3. a line rate below `thresholds.warning` is [`Level::Yellow`]
/// 4. anything else is [`Level::Green`]
///
/// Only the line rate is compared with the thresholds.
#[must_use]
pub fn classify(rates: &CoverageRates, diff: &DiffResult, thresholds: &Thresholds) -> Level {
    if diff.has_dropped {
        return Level::Critical;
    }

    let lines = rates.lines.rate;
    if lines < thresholds.alert {
        Level::Red
    } else if lines < thresholds.warning {
        Level::Yellow
    } else {
        Level::Green
    }
}
