//! Clover XML reader
//!
//! Converts a Clover report into the generic document tree the extractor
//! walks: every element becomes an object with its attributes under `"$"`,
//! non-blank text under `"_"`, and its children as arrays keyed by tag
//! name. The root element is stored as a plain object under its own name.

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde_json::{Map, Value};

use crate::core::ports::DocumentSource;
use crate::error::{CoverageError, Result};

/// Reads Clover reports from the filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct CloverFile;

impl DocumentSource for CloverFile {
    fn load(&self, path: &Path) -> anyhow::Result<Value> {
        Ok(read_document(path)?)
    }
}

/// Read and parse the report at `path`
pub fn read_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    log::debug!("read {} bytes from {}", content.len(), path.display());
    parse_document(&content)
}

/// Parse Clover XML text into a document tree
pub fn parse_document(xml: &str) -> Result<Value> {
    let mut reader = Reader::from_str(xml.trim_start_matches('\u{feff}'));
    reader.config_mut().trim_text(true);

    let mut stack: Vec<(String, Map<String, Value>)> = vec![(String::new(), Map::new())];
    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(open(&start)?),
            Event::Empty(start) => {
                let (name, node) = open(&start)?;
                attach(&mut stack, name, node)?;
            },
            Event::End(_) => {
                let (name, node) =
                    stack.pop().ok_or_else(|| CoverageError::Xml("unbalanced end tag".to_string()))?;
                attach(&mut stack, name, node)?;
            },
            Event::Text(text) => {
                let text = text.unescape()?;
                if let Some((_, node)) = stack.last_mut().filter(|_| !text.trim().is_empty()) {
                    node.insert("_".to_string(), Value::String(text.into_owned()));
                }
            },
            Event::Eof => break,
            _ => {},
        }
    }

    match stack.pop() {
        Some((_, root)) if stack.is_empty() && !root.is_empty() => Ok(Value::Object(root)),
        Some((_, root)) if root.is_empty() && stack.is_empty() => {
            Err(CoverageError::Xml("document has no root element".to_string()))
        },
        _ => Err(CoverageError::Xml("unexpected end of document".to_string())),
    }
}

fn open(start: &BytesStart<'_>) -> Result<(String, Map<String, Value>)> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attrs = Map::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        attrs.insert(key, Value::String(attr.unescape_value()?.into_owned()));
    }

    let mut node = Map::new();
    if !attrs.is_empty() {
        node.insert("$".to_string(), Value::Object(attrs));
    }
    Ok((name, node))
}

fn attach(
    stack: &mut [(String, Map<String, Value>)],
    name: String,
    node: Map<String, Value>,
) -> Result<()> {
    let depth = stack.len();
    let (_, parent) = stack
        .last_mut()
        .ok_or_else(|| CoverageError::Xml("element outside the document".to_string()))?;

    if depth == 1 {
        parent.insert(name, Value::Object(node));
        return Ok(());
    }

    match parent.entry(name).or_insert_with(|| Value::Array(Vec::new())) {
        Value::Array(children) => children.push(Value::Object(node)),
        _ => return Err(CoverageError::Xml("element name clashes with an attribute key".to_string())),
    }
    Ok(())
}
