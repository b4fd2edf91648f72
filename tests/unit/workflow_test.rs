//! Tests for the run workflow with mocked collaborators

use coverage_monitor::Level;
use coverage_monitor::adapters::{EventContext, PullRequestRef};
use coverage_monitor::config::{ActionConfig, Input, MapInputs};
use coverage_monitor::core::models::StatusState;
use coverage_monitor::workflow::{Collaborators, default_key_prefix, run};
use serde_json::{Value, json};

use super::mocks::{HostCall, MockBaselineStore, MockDocumentSource, MockReviewHost};

fn report(lines_covered: u64) -> Value {
    json!({ "coverage": { "project": [ { "metrics": [ { "$": {
        "statements": "100", "coveredstatements": lines_covered.to_string(),
        "elements": "100", "coveredelements": "80",
        "methods": "10", "coveredmethods": "8",
        "conditionals": "10", "coveredconditionals": "5",
    } } ] } ] } })
}

fn config(extra: &[(Input, &str)]) -> ActionConfig {
    let mut inputs = MapInputs::new()
        .with(Input::GithubToken, "***")
        .with(Input::CloverFile, "clover.xml")
        .with(Input::ThresholdAlert, "50")
        .with(Input::ThresholdWarning, "90");
    for (input, value) in extra {
        inputs = inputs.with(*input, *value);
    }
    ActionConfig::load(&inputs).unwrap()
}

fn pull_request_event() -> EventContext {
    EventContext {
        repository: Some("octo/app".to_string()),
        sha: Some("head-sha".to_string()),
        pull_request: Some(PullRequestRef {
            number: 7,
            html_url: Some("https://github.com/octo/app/pull/7".to_string()),
            base_sha: Some("base-sha".to_string()),
        }),
    }
}

fn push_event() -> EventContext {
    EventContext {
        pull_request: None,
        ..pull_request_event()
    }
}

#[test]
fn nothing_enabled_is_skipped() {
    let documents = MockDocumentSource::new();
    let host = MockReviewHost::new();
    let collaborators = Collaborators {
        documents: &documents,
        host: Some(&host),
        store: None,
    };

    let result = run(&config(&[]), &pull_request_event(), &collaborators).unwrap();
    assert!(result.skipped.is_some());
    assert!(host.calls().is_empty());
}

#[test]
fn push_event_is_skipped() {
    let documents = MockDocumentSource::new().with_document("clover.xml", report(75));
    let collaborators = Collaborators {
        documents: &documents,
        host: None,
        store: None,
    };

    let result = run(&config(&[(Input::Check, "true")]), &push_event(), &collaborators).unwrap();
    assert_eq!(result.skipped.as_deref(), Some("not a pull request event"));
    assert_eq!(result.level, None);
}

#[test]
fn posts_status_and_comment() {
    let documents = MockDocumentSource::new().with_document("clover.xml", report(75));
    let host = MockReviewHost::new();
    let collaborators = Collaborators {
        documents: &documents,
        host: Some(&host),
        store: None,
    };
    let config = config(&[(Input::Check, "true"), (Input::Comment, "true")]);

    let result = run(&config, &pull_request_event(), &collaborators).unwrap();

    assert_eq!(result.level, Some(Level::Yellow));
    assert!(result.status_posted);
    assert!(result.comment_posted);

    let statuses = host.statuses();
    assert_eq!(statuses.len(), 1);
    let (sha, status) = &statuses[0];
    assert_eq!(sha, "head-sha");
    assert_eq!(status.state, StatusState::Success);
    assert_eq!(status.description, "Warning: low coverage - 75%");
    assert_eq!(status.target_url.as_deref(), Some("https://github.com/octo/app/pull/7"));
    assert_eq!(status.context, "Coverage Report");

    let comments = host.comments();
    assert_eq!(comments.len(), 1);
    assert!(comments[0].body.starts_with("<!-- coverage-monitor-action: Coverage Report -->\n"));
    assert!(comments[0].body.contains("| Lines: | 75% ( 75 / 100 ) | 0% |"));
}

#[test]
fn check_only_posts_no_comment() {
    let documents = MockDocumentSource::new().with_document("clover.xml", report(40));
    let host = MockReviewHost::new();
    let collaborators = Collaborators {
        documents: &documents,
        host: Some(&host),
        store: None,
    };

    let result = run(&config(&[(Input::Check, "true")]), &pull_request_event(), &collaborators).unwrap();

    assert_eq!(result.level, Some(Level::Red));
    assert!(!result.comment_posted);
    assert_eq!(host.calls().len(), 1);
    assert_eq!(host.statuses()[0].1.description, "Error: Too low coverage - 40%");
}

#[test]
fn base_file_regression_is_critical() {
    let documents = MockDocumentSource::new()
        .with_document("clover.xml", report(75))
        .with_document("base.xml", report(80));
    let host = MockReviewHost::new();
    let collaborators = Collaborators {
        documents: &documents,
        host: Some(&host),
        store: None,
    };
    let config = config(&[(Input::Comment, "true"), (Input::BaseCloverFile, "base.xml")]);

    let result = run(&config, &pull_request_event(), &collaborators).unwrap();

    assert_eq!(result.level, Some(Level::Critical));
    assert!(host.comments()[0].body.contains("| Lines: | 75% ( 75 / 100 ) | -5% |"));
}

#[test]
fn missing_base_file_fails_unless_ignored() {
    let documents = MockDocumentSource::new().with_document("clover.xml", report(75));
    let host = MockReviewHost::new();
    let collaborators = Collaborators {
        documents: &documents,
        host: Some(&host),
        store: None,
    };

    let strict = config(&[(Input::Check, "true"), (Input::BaseCloverFile, "gone.xml")]);
    assert!(run(&strict, &pull_request_event(), &collaborators).is_err());
    assert!(host.calls().is_empty());

    let lenient = config(&[
        (Input::Check, "true"),
        (Input::BaseCloverFile, "gone.xml"),
        (Input::IgnoreMissingBase, "true"),
    ]);
    let result = run(&lenient, &pull_request_event(), &collaborators).unwrap();
    assert_eq!(result.level, Some(Level::Yellow));
}

#[test]
fn unreadable_base_report_fails_unless_ignored() {
    let documents = MockDocumentSource::new()
        .with_document("clover.xml", report(75))
        .with_document("base.xml", json!({ "coverage": {} }));
    let host = MockReviewHost::new();
    let collaborators = Collaborators {
        documents: &documents,
        host: Some(&host),
        store: None,
    };

    let strict = config(&[(Input::Check, "true"), (Input::BaseCloverFile, "base.xml")]);
    let err = run(&strict, &pull_request_event(), &collaborators).unwrap_err();
    assert!(format!("{err:#}").contains("malformed coverage document"), "{err:#}");
    assert!(host.calls().is_empty());

    let lenient = config(&[
        (Input::Check, "true"),
        (Input::BaseCloverFile, "base.xml"),
        (Input::IgnoreMissingBase, "true"),
    ]);
    let result = run(&lenient, &pull_request_event(), &collaborators).unwrap();
    assert_eq!(result.level, Some(Level::Yellow));
    assert_eq!(host.statuses()[0].1.description, "Warning: low coverage - 75%");
}

#[test]
fn store_uploads_current_and_downloads_base() {
    let documents = MockDocumentSource::new()
        .with_document("clover.xml", report(75))
        .with_document("cache/base.xml", report(70));
    let store = MockBaselineStore::new().with_blob("coverage/octo/app/base-sha", "cache/base.xml");
    let host = MockReviewHost::new();
    let collaborators = Collaborators {
        documents: &documents,
        host: Some(&host),
        store: Some(&store),
    };

    let result = run(&config(&[(Input::Comment, "true")]), &pull_request_event(), &collaborators).unwrap();

    assert_eq!(store.uploads(), vec!["coverage/octo/app/head-sha".to_string()]);
    assert_eq!(store.downloads(), vec!["coverage/octo/app/base-sha".to_string()]);
    assert_eq!(result.level, Some(Level::Yellow));
    assert!(host.comments()[0].body.contains("| Lines: | 75% ( 75 / 100 ) | 5% |"));
}

#[test]
fn store_uploads_on_push() {
    let documents = MockDocumentSource::new();
    let store = MockBaselineStore::new();
    let collaborators = Collaborators {
        documents: &documents,
        host: None,
        store: Some(&store),
    };
    let config = config(&[(Input::Check, "true"), (Input::BaselineKeyPrefix, "reports/")]);

    let result = run(&config, &push_event(), &collaborators).unwrap();

    assert!(result.skipped.is_some());
    assert_eq!(store.uploads(), vec!["reports/head-sha".to_string()]);
    assert!(store.downloads().is_empty());
}

#[test]
fn missing_stored_base_fails_unless_ignored() {
    let documents = MockDocumentSource::new().with_document("clover.xml", report(75));
    let store = MockBaselineStore::new();
    let host = MockReviewHost::new();
    let collaborators = Collaborators {
        documents: &documents,
        host: Some(&host),
        store: Some(&store),
    };

    let err = run(&config(&[(Input::Check, "true")]), &pull_request_event(), &collaborators).unwrap_err();
    assert!(format!("{err:#}").contains("coverage/octo/app/base-sha"), "{err:#}");

    let lenient = config(&[(Input::Check, "true"), (Input::IgnoreMissingBase, "true")]);
    let result = run(&lenient, &pull_request_event(), &collaborators).unwrap();
    assert!(result.status_posted);
}

#[test]
fn explicit_base_file_skips_download() {
    let documents = MockDocumentSource::new()
        .with_document("clover.xml", report(75))
        .with_document("base.xml", report(75));
    let store = MockBaselineStore::new();
    let host = MockReviewHost::new();
    let collaborators = Collaborators {
        documents: &documents,
        host: Some(&host),
        store: Some(&store),
    };
    let config = config(&[(Input::Check, "true"), (Input::BaseCloverFile, "base.xml")]);

    run(&config, &pull_request_event(), &collaborators).unwrap();
    assert!(store.downloads().is_empty());
    assert_eq!(store.uploads().len(), 1);
}

#[test]
fn pull_request_without_host_is_an_error() {
    let documents = MockDocumentSource::new().with_document("clover.xml", report(75));
    let collaborators = Collaborators {
        documents: &documents,
        host: None,
        store: None,
    };
    assert!(run(&config(&[(Input::Check, "true")]), &pull_request_event(), &collaborators).is_err());
}

#[test]
fn comment_mode_is_honored() {
    let documents = MockDocumentSource::new().with_document("clover.xml", report(75));
    let host = MockReviewHost::new();
    let collaborators = Collaborators {
        documents: &documents,
        host: Some(&host),
        store: None,
    };
    let config = config(&[(Input::Comment, "true"), (Input::CommentMode, "update")]);

    run(&config, &pull_request_event(), &collaborators).unwrap();
    run(&config, &pull_request_event(), &collaborators).unwrap();

    assert_eq!(host.comments().len(), 1);
    assert!(matches!(host.calls().last(), Some(HostCall::Update(1001, _))));
}

#[test]
fn key_prefix_defaults_to_repository() {
    assert_eq!(default_key_prefix("octo/app"), "coverage/octo/app");
}
