//! Error types for the markup engine.
//!
//! Uses the dual-error pattern: `MarkupError` for library consumers, with
//! the grammar's own `ParseError` carried through unchanged so its position
//! reaches the caller.

use bylaw_syntax::ParseError;
use thiserror::Error;

/// Main error type for the markup library.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// The by-law text failed the primary grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A syntax tree node turned up where the engine has no rule for it.
    #[error("Unexpected {kind} node in {context}")]
    UnexpectedNode { kind: &'static str, context: String },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Missing required XML element.
    #[error("Missing required XML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// XML serialization failed.
    #[error("XML writing failed: {0}")]
    XmlWrite(#[source] std::io::Error),

    /// Serialized output was not UTF-8.
    #[error("Output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML (de)serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid date format.
    #[error("Invalid date format: '{0}'. Expected YYYY-MM-DD (e.g., 2025-01-01)")]
    InvalidDate(String),
}

/// Result type alias for markup operations.
pub type Result<T> = std::result::Result<T, MarkupError>;
