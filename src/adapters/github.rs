//! GitHub review host
//!
//! Blocking REST client for commit statuses and issue comments of one
//! repository.

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::core::models::StatusPayload;
use crate::core::ports::{ReviewComment, ReviewHost};
use crate::error::{CoverageError, Result};

const DEFAULT_API_URL: &str = "https://api.github.com";
const PAGE_SIZE: usize = 100;

/// GitHub REST API client scoped to one repository
#[derive(Debug, Clone)]
pub struct GitHubClient {
    base_url: String,
    owner: String,
    repo: String,
    token: String,
    client: Client,
}

impl GitHubClient {
    /// Client for `owner/repo` authenticated with `token`
    #[must_use]
    pub fn new(owner: &str, repo: &str, token: &str) -> Self {
        let base_url =
            std::env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::with_base_url(&base_url, owner, repo, token)
    }

    /// Client against a custom API root (GitHub Enterprise, tests)
    #[must_use]
    pub fn with_base_url(base_url: &str, owner: &str, repo: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            token: token.to_string(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/repos/{}/{}{path}", self.base_url, self.owner, self.repo)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("User-Agent", concat!("coverage-monitor/", env!("CARGO_PKG_VERSION")))
            .header("Accept", "application/vnd.github+json")
            .bearer_auth(&self.token)
    }

    fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = self
            .authorized(request)
            .send()
            .map_err(|err| CoverageError::Http(err.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(CoverageError::Api { status, body });
        }
        Ok(response)
    }

    fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        self.send(request)?
            .json()
            .map_err(|err| CoverageError::Http(format!("decoding response failed: {err}")))
    }
}

impl ReviewHost for GitHubClient {
    fn create_status(&self, sha: &str, status: &StatusPayload) -> anyhow::Result<()> {
        let url = self.url(&format!("/statuses/{sha}"));
        self.send(self.client.post(url).json(status))?;
        log::info!("created status `{}` on {sha}", status.context);
        Ok(())
    }

    fn list_comments(&self, pr: u64) -> anyhow::Result<Vec<ReviewComment>> {
        let url = self.url(&format!("/issues/{pr}/comments"));
        let mut comments = Vec::new();
        for page in 1.. {
            let request = self.client.get(format!("{url}?per_page={PAGE_SIZE}&page={page}"));
            let batch: Vec<ReviewComment> = self.send_json(request)?;
            let done = batch.len() < PAGE_SIZE;
            comments.extend(batch);
            if done {
                break;
            }
        }
        log::debug!("pull request #{pr} has {} comment(s)", comments.len());
        Ok(comments)
    }

    fn create_comment(&self, pr: u64, body: &str) -> anyhow::Result<()> {
        let url = self.url(&format!("/issues/{pr}/comments"));
        self.send(self.client.post(url).json(&json!({ "body": body })))?;
        log::info!("commented on pull request #{pr}");
        Ok(())
    }

    fn update_comment(&self, id: u64, body: &str) -> anyhow::Result<()> {
        let url = self.url(&format!("/issues/comments/{id}"));
        self.send(self.client.patch(url).json(&json!({ "body": body })))?;
        log::info!("updated comment {id}");
        Ok(())
    }

    fn delete_comment(&self, id: u64) -> anyhow::Result<()> {
        let url = self.url(&format!("/issues/comments/{id}"));
        self.send(self.client.delete(url))?;
        Ok(())
    }
}
