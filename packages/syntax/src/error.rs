//! Error types for the by-law grammar.

use thiserror::Error;

/// A grammar failure annotated with its position in the source text.
///
/// Positions are absolute: when the definitions sub-grammar runs over a slice
/// of a larger document, `offset`, `line` and `column` still refer to the
/// original document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parse error at line {line}, column {column}: expected {expected}")]
pub struct ParseError {
    /// Byte offset into the source text.
    pub offset: usize,

    /// 1-based line number.
    pub line: usize,

    /// 1-based column, counted in characters.
    pub column: usize,

    /// What the grammar expected to find at this position.
    pub expected: String,
}

impl ParseError {
    /// Create an error at `offset` within `text`.
    ///
    /// Offsets past the end are clamped, and offsets inside a multi-byte
    /// character are moved back to its start.
    #[must_use]
    pub fn at(text: &str, offset: usize, expected: impl Into<String>) -> Self {
        let mut offset = offset.min(text.len());
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }

        let before = &text[..offset];
        let line = before.matches('\n').count() + 1;
        let column = before
            .rsplit('\n')
            .next()
            .map_or(0, |current| current.chars().count())
            + 1;

        Self {
            offset,
            line,
            column,
            expected: expected.into(),
        }
    }
}

/// Result type alias for grammar operations.
pub type Result<T> = std::result::Result<T, ParseError>;
