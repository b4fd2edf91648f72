//! Coverage levels
//!
//! The discrete severity a metric set is classified into.

use serde::{Deserialize, Serialize};

/// Severity level of a coverage result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Coverage dropped compared to the baseline
    Critical,
    /// Line coverage below the alert threshold
    Red,
    /// Line coverage below the warning threshold
    Yellow,
    /// Line coverage at or above the warning threshold
    Green,
}

impl Level {
    /// Lowercase name, also used as the badge colour
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }

    /// Whether this level fails the commit status
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Critical | Self::Red)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
