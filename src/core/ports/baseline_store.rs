//! Baseline store port
//!
//! Defines the interface for persisting coverage reports between runs so
//! that a later pull request can compare against its base commit.

use std::path::{Path, PathBuf};

/// Blob storage for coverage reports, keyed by `/`-separated names
pub trait BaselineStore: Send + Sync {
    /// Store the file at `source` under `key`, replacing any previous blob
    fn upload(&self, key: &str, source: &Path) -> anyhow::Result<()>;

    /// Fetch the blob stored under `key` into a local file
    ///
    /// Returns the path of the local copy.
    fn download(&self, key: &str) -> anyhow::Result<PathBuf>;
}
