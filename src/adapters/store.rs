//! Directory-backed baseline store
//!
//! Treats a directory (a mounted bucket, a CI cache folder, a shared
//! volume) as blob storage. Keys map to relative paths; downloads are
//! copied into a scratch directory and retried with exponential backoff.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::Context;

use crate::core::ports::BaselineStore;

/// Exponential backoff settings for transient failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first
    pub attempts: u32,
    /// Delay before the second attempt; doubled after each failure
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            initial_delay: Duration::from_millis(200),
        }
    }
}

impl RetryPolicy {
    /// Run `op` until it succeeds or the attempts are used up
    ///
    /// Returns the last error when every attempt fails.
    pub fn run<T>(&self, what: &str, mut op: impl FnMut() -> anyhow::Result<T>) -> anyhow::Result<T> {
        let attempts = self.attempts.max(1);
        let mut delay = self.initial_delay;
        let mut attempt = 1;
        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(err) if attempt < attempts => {
                    log::warn!("{what} failed (attempt {attempt}/{attempts}): {err:#}");
                    thread::sleep(delay);
                    delay = delay.saturating_mul(2);
                    attempt += 1;
                },
                Err(err) => return Err(err),
            }
        }
    }
}

/// Blob store rooted at a directory
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
    scratch: PathBuf,
    retry: RetryPolicy,
}

impl DirectoryStore {
    /// Store rooted at `root`, downloading into `scratch`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, scratch: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            scratch: scratch.into(),
            retry: RetryPolicy::default(),
        }
    }

    /// Replace the retry policy used for downloads
    #[must_use]
    pub const fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    fn blob_path(&self, key: &str) -> anyhow::Result<PathBuf> {
        let relative = Path::new(key.trim_start_matches('/'));
        let safe = relative.components().all(|c| matches!(c, Component::Normal(_)));
        if key.trim().is_empty() || !safe {
            anyhow::bail!("invalid store key: {key:?}");
        }
        Ok(self.root.join(relative))
    }
}

impl BaselineStore for DirectoryStore {
    fn upload(&self, key: &str, source: &Path) -> anyhow::Result<()> {
        let target = self.blob_path(key)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, &target)
            .with_context(|| format!("uploading {} to {}", source.display(), target.display()))?;
        log::info!("stored {} as {key}", source.display());
        Ok(())
    }

    fn download(&self, key: &str) -> anyhow::Result<PathBuf> {
        let blob = self.blob_path(key)?;
        let destination = self.scratch.join("baseClover.xml");
        self.retry.run(&format!("download of {key}"), || {
            fs::create_dir_all(&self.scratch)?;
            fs::copy(&blob, &destination)
                .with_context(|| format!("downloading {key} from {}", self.root.display()))?;
            Ok(destination.clone())
        })
    }
}
