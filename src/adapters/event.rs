//! Workflow event context
//!
//! The parts of a GitHub Actions event payload the run workflow needs.
//! Read from the file named by `GITHUB_EVENT_PATH`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Deserialize)]
struct EventPayload {
    after: Option<String>,
    pull_request: Option<PullRequestPayload>,
    repository: Option<RepositoryPayload>,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    number: u64,
    html_url: Option<String>,
    base: Option<BasePayload>,
    head: Option<BasePayload>,
}

#[derive(Debug, Deserialize)]
struct BasePayload {
    sha: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RepositoryPayload {
    full_name: String,
}

/// Pull request coordinates of the current workflow run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    /// Pull request number
    pub number: u64,
    /// Web URL, used as the status link
    pub html_url: Option<String>,
    /// Commit the pull request is based on
    pub base_sha: Option<String>,
}

/// What the run workflow knows about the triggering event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventContext {
    /// `owner/name` of the repository
    pub repository: Option<String>,
    /// Head commit of the push or pull request
    pub sha: Option<String>,
    /// Present when the event is a pull request
    pub pull_request: Option<PullRequestRef>,
}

impl EventContext {
    /// Build the context from the Actions environment
    ///
    /// A missing `GITHUB_EVENT_PATH` yields an empty payload;
    /// `GITHUB_REPOSITORY` fills in the repository name when the payload
    /// has none.
    pub fn from_env() -> Result<Self> {
        let mut context = match std::env::var_os("GITHUB_EVENT_PATH") {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        if context.repository.is_none() {
            context.repository = std::env::var("GITHUB_REPOSITORY").ok().filter(|r| !r.is_empty());
        }
        Ok(context)
    }

    /// Read an event payload file
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Parse an event payload
    pub fn from_json(json: &str) -> Result<Self> {
        let payload: EventPayload = serde_json::from_str(json)?;
        let head_sha = payload
            .pull_request
            .as_ref()
            .and_then(|pr| pr.head.as_ref())
            .and_then(|head| head.sha.clone());

        Ok(Self {
            repository: payload.repository.map(|r| r.full_name),
            sha: payload.after.or(head_sha),
            pull_request: payload.pull_request.map(|pr| PullRequestRef {
                number: pr.number,
                html_url: pr.html_url,
                base_sha: pr.base.and_then(|b| b.sha),
            }),
        })
    }

    /// Split `owner/name` into its parts
    #[must_use]
    pub fn owner_and_name(&self) -> Option<(&str, &str)> {
        self.repository.as_deref().and_then(|r| r.split_once('/'))
    }
}
