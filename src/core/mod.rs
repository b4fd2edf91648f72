//! Core domain logic for coverage-monitor
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`RateMetric`, `MetricSet`, `DiffResult`, `Level`)
//! - `services/` - Extraction, diffing, classification and rendering
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
