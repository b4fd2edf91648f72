//! The run workflow
//!
//! Wires the core to its collaborators for one CI run: keep the report in
//! the baseline store, fetch the base commit's report, compute the metric
//! set, then post a commit status and a pull request comment.
//!
//! Every collaborator is passed in, so the whole flow runs against mocks
//! in tests.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::adapters::EventContext;
use crate::config::ActionConfig;
use crate::core::models::MetricSet;
use crate::core::ports::{BaselineStore, DocumentSource, ReviewHost};
use crate::core::services::{
    ExtractOptions, comment_body, comment_header, extract, publish_comment, status_payload,
};
use crate::output::RunResult;

/// Collaborators of a run
#[allow(missing_debug_implementations)]
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    /// Reads coverage reports
    pub documents: &'a dyn DocumentSource,
    /// Publishes statuses and comments; `None` when no pull request is involved
    pub host: Option<&'a dyn ReviewHost>,
    /// Baseline blob storage, if configured
    pub store: Option<&'a dyn BaselineStore>,
}

/// Execute the run workflow
pub fn run(
    config: &ActionConfig,
    event: &EventContext,
    collaborators: &Collaborators<'_>,
) -> anyhow::Result<RunResult> {
    if !config.check && !config.comment {
        return Ok(RunResult::skipped("neither check nor comment is enabled"));
    }

    let stored_base = match collaborators.store {
        Some(store) => sync_store(config, event, store)?,
        None => None,
    };

    let Some(pull_request) = &event.pull_request else {
        return Ok(RunResult::skipped("not a pull request event"));
    };
    let Some(host) = collaborators.host else {
        anyhow::bail!("no review host available for pull request #{}", pull_request.number);
    };

    let base_file = stored_base.or_else(|| config.base_clover_file.clone());
    let metric = compute(config, collaborators.documents, base_file.as_deref())?;
    log::info!("coverage level: {}", metric.level);

    let mut result = RunResult {
        level: Some(metric.level),
        status_posted: false,
        comment_posted: false,
        skipped: None,
    };

    if config.check {
        let sha = event
            .sha
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("event has no commit sha to attach a status to"))?;
        let status = status_payload(&metric, pull_request.html_url.as_deref(), &config.status_context);
        host.create_status(sha, &status)?;
        result.status_posted = true;
    }

    if config.comment {
        let body = comment_body(&metric, &config.comment_context);
        let header = comment_header(&config.comment_context);
        publish_comment(host, pull_request.number, &body, &header, config.comment_mode)?;
        result.comment_posted = true;
    }

    Ok(result)
}

/// Default key prefix for a repository
#[must_use]
pub fn default_key_prefix(repository: &str) -> String {
    format!("coverage/{repository}")
}

fn sync_store(
    config: &ActionConfig,
    event: &EventContext,
    store: &dyn BaselineStore,
) -> anyhow::Result<Option<PathBuf>> {
    let prefix = match (&config.baseline_key_prefix, &event.repository) {
        (Some(prefix), _) => prefix.trim_end_matches('/').to_string(),
        (None, Some(repository)) => default_key_prefix(repository),
        (None, None) => anyhow::bail!("baseline store needs a key prefix or a repository name"),
    };

    if let Some(sha) = &event.sha {
        store.upload(&format!("{prefix}/{sha}"), &config.clover_file)?;
    }

    let base_sha = event.pull_request.as_ref().and_then(|pr| pr.base_sha.as_deref());
    let Some(base_sha) = base_sha.filter(|_| config.base_clover_file.is_none()) else {
        return Ok(None);
    };

    let key = format!("{prefix}/{base_sha}");
    match store.download(&key) {
        Ok(path) => Ok(Some(path)),
        Err(err) if config.ignore_missing_base => {
            log::warn!("[ignored] could not download {key}: {err:#}");
            Ok(None)
        },
        Err(err) => Err(err.context(format!("downloading baseline {key}"))),
    }
}

fn compute(
    config: &ActionConfig,
    documents: &dyn DocumentSource,
    base_file: Option<&Path>,
) -> anyhow::Result<MetricSet> {
    let current = documents.load(&config.clover_file)?;

    let baseline = match base_file {
        Some(path) => match read_baseline(documents, path) {
            Ok(metric) => Some(metric),
            Err(err) if config.ignore_missing_base => {
                log::warn!("[ignored] could not read baseline {}: {err:#}", path.display());
                None
            },
            Err(err) => return Err(err),
        },
        None => None,
    };

    let options = ExtractOptions {
        thresholds: config.thresholds(),
        baseline: baseline.as_ref(),
        diff_tolerance: config.diff_tolerance,
    };
    Ok(extract(&current, &options)?)
}

fn read_baseline(documents: &dyn DocumentSource, path: &Path) -> anyhow::Result<MetricSet> {
    let doc = documents.load(path)?;
    extract(&doc, &ExtractOptions::default())
        .with_context(|| format!("reading baseline {}", path.display()))
}
