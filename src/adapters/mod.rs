//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `clover` - Clover XML report reading
//! - `github` - GitHub REST API (statuses, comments)
//! - `store` - Directory-backed baseline storage with retry
//! - `event` - GitHub Actions event payload

pub mod clover;
pub mod event;
#[cfg(feature = "github")]
pub mod github;
pub mod store;

pub use clover::CloverFile;
pub use event::{EventContext, PullRequestRef};
#[cfg(feature = "github")]
pub use github::GitHubClient;
pub use store::{DirectoryStore, RetryPolicy};
