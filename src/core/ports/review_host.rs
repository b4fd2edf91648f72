//! Review host port
//!
//! Defines the interface for publishing results on a code review
//! platform: commit statuses and pull request comments.

use serde::{Deserialize, Serialize};

use super::super::models::StatusPayload;

/// A comment on a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewComment {
    /// Host-assigned comment ID
    pub id: u64,
    /// Markdown body
    #[serde(default)]
    pub body: String,
}

/// Review host abstraction
///
/// Implementations talk to the host's API for one repository.
pub trait ReviewHost: Send + Sync {
    /// Attach a commit status to `sha`
    fn create_status(&self, sha: &str, status: &StatusPayload) -> anyhow::Result<()>;

    /// List all comments on pull request `pr`, oldest first
    fn list_comments(&self, pr: u64) -> anyhow::Result<Vec<ReviewComment>>;

    /// Create a comment on pull request `pr`
    fn create_comment(&self, pr: u64, body: &str) -> anyhow::Result<()>;

    /// Replace the body of comment `id`
    fn update_comment(&self, id: u64, body: &str) -> anyhow::Result<()>;

    /// Delete comment `id`
    fn delete_comment(&self, id: u64) -> anyhow::Result<()>;

    /// Comments whose body starts with `header`
    fn find_comments(&self, pr: u64, header: &str) -> anyhow::Result<Vec<ReviewComment>> {
        Ok(self
            .list_comments(pr)?
            .into_iter()
            .filter(|comment| comment.body.starts_with(header))
            .collect())
    }
}
