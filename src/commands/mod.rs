//! Command implementations

mod report;
mod run;

pub use report::{ReportArgs, report};
pub use run::run;
