//! Coverage document source port

use std::path::Path;

use serde_json::Value;

/// Loads a coverage report into the generic document tree
pub trait DocumentSource: Send + Sync {
    /// Read and parse the report at `path`
    fn load(&self, path: &Path) -> anyhow::Result<Value>;
}
