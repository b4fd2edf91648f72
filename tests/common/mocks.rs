//! Mock implementations of port traits for testing
//!
//! These mocks record every call so tests can assert on what the workflow
//! asked of its collaborators, without network or storage I/O.

use coverage_monitor::core::models::StatusPayload;
use coverage_monitor::core::ports::{BaselineStore, DocumentSource, ReviewComment, ReviewHost};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A call made against the mock review host
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Status(String, StatusPayload),
    Create(u64, String),
    Update(u64, String),
    Delete(u64),
}

/// Mock implementation of ReviewHost
pub struct MockReviewHost {
    comments: Mutex<Vec<ReviewComment>>,
    calls: Mutex<Vec<HostCall>>,
    next_id: Mutex<u64>,
}

impl MockReviewHost {
    pub fn new() -> Self {
        Self::with_comments(Vec::new())
    }

    pub fn with_comments(comments: Vec<ReviewComment>) -> Self {
        Self {
            comments: Mutex::new(comments),
            calls: Mutex::new(Vec::new()),
            next_id: Mutex::new(1000),
        }
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn statuses(&self) -> Vec<(String, StatusPayload)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                HostCall::Status(sha, status) => Some((sha, status)),
                _ => None,
            })
            .collect()
    }

    pub fn comments(&self) -> Vec<ReviewComment> {
        self.comments.lock().unwrap().clone()
    }
}

impl Default for MockReviewHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewHost for MockReviewHost {
    fn create_status(&self, sha: &str, status: &StatusPayload) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(HostCall::Status(sha.to_string(), status.clone()));
        Ok(())
    }

    fn list_comments(&self, _pr: u64) -> anyhow::Result<Vec<ReviewComment>> {
        Ok(self.comments())
    }

    fn create_comment(&self, pr: u64, body: &str) -> anyhow::Result<()> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        self.comments.lock().unwrap().push(ReviewComment {
            id: *next_id,
            body: body.to_string(),
        });
        self.calls.lock().unwrap().push(HostCall::Create(pr, body.to_string()));
        Ok(())
    }

    fn update_comment(&self, id: u64, body: &str) -> anyhow::Result<()> {
        for comment in self.comments.lock().unwrap().iter_mut().filter(|c| c.id == id) {
            comment.body = body.to_string();
        }
        self.calls.lock().unwrap().push(HostCall::Update(id, body.to_string()));
        Ok(())
    }

    fn delete_comment(&self, id: u64) -> anyhow::Result<()> {
        self.comments.lock().unwrap().retain(|c| c.id != id);
        self.calls.lock().unwrap().push(HostCall::Delete(id));
        Ok(())
    }
}

/// Mock implementation of BaselineStore
///
/// Uploaded files are remembered by key; downloads hand back the path that
/// was uploaded under that key, or fail when there is none.
pub struct MockBaselineStore {
    blobs: Mutex<HashMap<String, PathBuf>>,
    uploads: Mutex<Vec<String>>,
    downloads: Mutex<Vec<String>>,
}

impl MockBaselineStore {
    pub fn new() -> Self {
        Self {
            blobs: Mutex::new(HashMap::new()),
            uploads: Mutex::new(Vec::new()),
            downloads: Mutex::new(Vec::new()),
        }
    }

    pub fn with_blob(self, key: &str, path: impl Into<PathBuf>) -> Self {
        self.blobs.lock().unwrap().insert(key.to_string(), path.into());
        self
    }

    pub fn uploads(&self) -> Vec<String> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn downloads(&self) -> Vec<String> {
        self.downloads.lock().unwrap().clone()
    }
}

impl Default for MockBaselineStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BaselineStore for MockBaselineStore {
    fn upload(&self, key: &str, source: &Path) -> anyhow::Result<()> {
        self.uploads.lock().unwrap().push(key.to_string());
        self.blobs.lock().unwrap().insert(key.to_string(), source.to_path_buf());
        Ok(())
    }

    fn download(&self, key: &str) -> anyhow::Result<PathBuf> {
        self.downloads.lock().unwrap().push(key.to_string());
        self.blobs
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no such key: {key}"))
    }
}

/// Mock implementation of DocumentSource
///
/// Serves pre-built document trees by path.
pub struct MockDocumentSource {
    documents: HashMap<PathBuf, Value>,
}

impl MockDocumentSource {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
        }
    }

    pub fn with_document(mut self, path: impl Into<PathBuf>, doc: Value) -> Self {
        self.documents.insert(path.into(), doc);
        self
    }
}

impl Default for MockDocumentSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSource for MockDocumentSource {
    fn load(&self, path: &Path) -> anyhow::Result<Value> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no such file: {}", path.display()))
    }
}
