//! coverage-monitor - Clover coverage metrics for code review
//!
//! Reads a Clover report, compares it with a baseline and reports the
//! result as a commit status and a pull request comment.

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

mod cli;
mod commands;

use std::process::ExitCode;

/// Main entry point for the coverage-monitor CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        },
    }
}
