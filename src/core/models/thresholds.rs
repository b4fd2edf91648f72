//! Classification thresholds

use serde::{Deserialize, Serialize};

/// Line-rate thresholds used by the classifier
///
/// Rates strictly below `alert` are red, rates strictly below `warning`
/// are yellow, everything else is green.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Percentage below which coverage is red
    pub alert: f64,
    /// Percentage below which coverage is yellow
    pub warning: f64,
}

impl Thresholds {
    /// Create thresholds from explicit percentages
    #[must_use]
    pub const fn new(alert: f64, warning: f64) -> Self {
        Self { alert, warning }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(50.0, 90.0)
    }
}
