//! Baseline comparison
//!
//! Pure comparison of two rate sets with no I/O.

use crate::core::models::{CoverageRates, DiffResult, round2};

/// Compare `current` against an optional `baseline`
///
/// Without a baseline every delta is `0` and nothing has dropped. A metric
/// counts as dropped when its delta plus `tolerance` is strictly negative,
/// so a positive tolerance forgives small regressions.
#[must_use]
pub fn diff(current: &CoverageRates, baseline: Option<&CoverageRates>, tolerance: f64) -> DiffResult {
    let Some(baseline) = baseline else {
        return DiffResult::no_baseline();
    };

    let mut result = DiffResult {
        lines: round2(current.lines.rate - baseline.lines.rate),
        statements: round2(current.statements.rate - baseline.statements.rate),
        methods: round2(current.methods.rate - baseline.methods.rate),
        branches: round2(current.branches.rate - baseline.branches.rate),
        has_dropped: false,
    };
    result.has_dropped = result.deltas().iter().any(|delta| delta + tolerance < 0.0);
    result
}
