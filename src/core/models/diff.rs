//! Baseline comparison result

use serde::{Deserialize, Serialize};

/// Per-metric deltas against a baseline, in percentage points
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    /// Line rate delta
    pub lines: f64,
    /// Statement rate delta
    pub statements: f64,
    /// Method rate delta
    pub methods: f64,
    /// Branch rate delta
    pub branches: f64,
    /// Whether any delta fell below the tolerance
    pub has_dropped: bool,
}

impl DiffResult {
    /// The result used when there is no baseline to compare with
    #[must_use]
    pub const fn no_baseline() -> Self {
        Self {
            lines: 0.0,
            statements: 0.0,
            methods: 0.0,
            branches: 0.0,
            has_dropped: false,
        }
    }

    /// Deltas in `lines, statements, methods, branches` order
    #[must_use]
    pub const fn deltas(&self) -> [f64; 4] {
        [self.lines, self.statements, self.methods, self.branches]
    }
}
