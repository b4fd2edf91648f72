//! Tests for the Clover reader
//!
//! Real report files go through the XML adapter and into the extractor.

use coverage_monitor::adapters::CloverFile;
use coverage_monitor::adapters::clover::read_document;
use coverage_monitor::core::ports::DocumentSource;
use coverage_monitor::{CoverageError, ExtractOptions, Level, extract};

use super::fixture;

#[test]
fn reads_fixture_into_document_tree() {
    let doc = read_document(&fixture("clover.xml")).unwrap();

    assert_eq!(doc["coverage"]["$"]["clover"], "3.2.0");
    let project = &doc["coverage"]["project"][0];
    assert_eq!(project["$"]["name"], "All files");
    assert_eq!(project["metrics"][0]["$"]["statements"], "34");
    assert_eq!(project["package"].as_array().unwrap().len(), 2);
    assert_eq!(project["package"][1]["file"][0]["$"]["name"], "util.js");
}

#[test]
fn extracts_fixture_totals() {
    let doc = CloverFile.load(&fixture("clover.xml")).unwrap();
    let metric = extract(&doc, &ExtractOptions::default()).unwrap();

    assert_eq!(metric.lines().rate, 70.59);
    assert_eq!(metric.statements().rate, 68.18);
    assert_eq!(metric.methods().rate, 83.33);
    assert_eq!(metric.branches().rate, 55.0);
    assert_eq!(metric.level, Level::Yellow);
}

#[test]
fn strips_byte_order_mark() {
    let doc = read_document(&fixture("clover-bom.xml")).unwrap();
    let metric = extract(&doc, &ExtractOptions::default()).unwrap();
    assert_eq!(metric.lines().rate, 100.0);
}

#[test]
fn report_without_metrics_is_malformed() {
    let doc = read_document(&fixture("broken.xml")).unwrap();
    let err = extract(&doc, &ExtractOptions::default()).unwrap_err();
    assert!(matches!(err, CoverageError::MalformedDocument(_)), "got {err:?}");
}
