//! coverage-monitor - Clover coverage metrics for code review
//!
//! This library reads a Clover coverage report, computes line, statement,
//! method and branch rates, compares them against an optional baseline,
//! classifies the result and renders it as a commit status and a pull
//! request comment.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod workflow;

pub use crate::core::models::{Level, MetricSet, Thresholds};
pub use crate::core::services::{ExtractOptions, extract};
pub use error::{CoverageError, Result};
