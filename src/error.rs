//! Error types for coverage-monitor

use thiserror::Error;

/// Errors raised while reading, computing or delivering coverage results
#[derive(Debug, Error)]
pub enum CoverageError {
    /// The coverage document does not contain the project metrics record
    #[error("malformed coverage document: {0}")]
    MalformedDocument(String),

    /// A raw counter is missing or is not a non-negative integer
    #[error("invalid counter `{name}`: {value:?}")]
    InvalidCounter {
        /// Counter attribute name (e.g. `coveredstatements`)
        name: String,
        /// Raw value as found in the document
        value: String,
    },

    /// The report could not be parsed as XML
    #[error("xml error: {0}")]
    Xml(String),

    /// Invalid configuration input
    #[error("config error: {0}")]
    Config(String),

    /// The review host answered with a non-success status
    #[error("api error ({status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// Transport-level HTTP failure
    #[error("http error: {0}")]
    Http(String),

    /// Underlying I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<quick_xml::Error> for CoverageError {
    fn from(value: quick_xml::Error) -> Self {
        Self::Xml(value.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for CoverageError {
    fn from(value: quick_xml::events::attributes::AttrError) -> Self {
        Self::Xml(value.to_string())
    }
}

/// Convenience result type for coverage-monitor
pub type Result<T> = std::result::Result<T, CoverageError>;
