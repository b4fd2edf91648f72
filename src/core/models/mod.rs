//! Domain models for coverage-monitor
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`RateMetric`] - covered over total for one dimension
//! - [`MetricSet`] - the four rates plus their diff and level
//! - [`DiffResult`] - deltas against a baseline
//! - [`Level`] - severity of a result
//! - [`Thresholds`] - classifier configuration
//! - [`StatusPayload`] - commit status sent to the review host
//! - [`CommentMode`] - how comments are posted

mod comment_mode;
mod diff;
mod level;
mod metric;
mod status;
mod thresholds;

pub use comment_mode::CommentMode;
pub use diff::DiffResult;
pub use level::Level;
pub use metric::{CoverageRates, MetricSet, RateMetric, rate, round2};
pub use status::{StatusPayload, StatusState};
pub use thresholds::Thresholds;
