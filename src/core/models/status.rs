//! Commit status payload

use serde::{Deserialize, Serialize};

/// State of a commit status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusState {
    /// The check passed
    Success,
    /// The check failed
    Failure,
}

/// Commit status as sent to the review host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPayload {
    /// Pass or fail
    pub state: StatusState,
    /// One-line summary
    pub description: String,
    /// Link shown next to the status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    /// Status name, used by the host to group updates
    pub context: String,
}
