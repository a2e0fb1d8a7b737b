//! Definitions sub-grammar.
//!
//! A definitions section reads as an optional introduction followed by
//! quoted terms:
//!
//! ```text
//! In this by-law, unless the context indicates otherwise:
//! "affected land" means land in respect of which an application has been lodged;
//! "council" means the council of the municipality;
//!     (a) including its committees;
//! ```

use crate::cursor::Cursor;
use crate::error::{ParseError, Result};
use crate::lines::{Line, LineKind};
use crate::tree::{Definition, DefinitionStatement, DefinitionsSection};

const OPENING_QUOTES: [char; 2] = ['"', '“'];
const CLOSING_QUOTES: [char; 2] = ['"', '”'];

/// Parse `text[start..]` as a definitions section.
///
/// # Arguments
///
/// * `text` - Source text; positions in errors are offsets into it
/// * `start` - Offset where the definitions body begins
///
/// # Returns
///
/// The intro and definitions, or a `ParseError` when the body contains no
/// quoted term, a term quote is never closed, or a list item appears before
/// the first definition.
pub fn parse_definitions(text: &str, start: usize) -> Result<DefinitionsSection> {
    if start > text.len() || !text.is_char_boundary(start) {
        return Err(ParseError::at(text, start, "start of definitions"));
    }

    let mut cursor = Cursor::new(text, start);
    let intro = intro(text, &mut cursor)?;

    let mut definitions = Vec::new();
    while let Some((line, _)) = cursor.peek() {
        if !starts_definition(&line) {
            break;
        }
        definitions.push(definition(text, &mut cursor, line)?);
    }

    if definitions.is_empty() {
        let offset = cursor.peek().map_or(text.len(), |(line, _)| line.start);
        return Err(ParseError::at(text, offset, "quoted defined term"));
    }

    Ok(DefinitionsSection { intro, definitions })
}

fn starts_definition(line: &Line<'_>) -> bool {
    line.text.starts_with(OPENING_QUOTES)
}

/// Collect the lines before the first definition.
fn intro(text: &str, cursor: &mut Cursor<'_>) -> Result<String> {
    let mut parts = Vec::new();

    while let Some((line, kind)) = cursor.peek() {
        if starts_definition(&line) {
            break;
        }
        if matches!(kind, LineKind::Item { .. }) {
            return Err(ParseError::at(text, line.start, "quoted defined term"));
        }
        parts.push(line.text);
        cursor.advance();
    }

    Ok(parts.join(" "))
}

/// Parse one definition line and the statements that follow it.
fn definition(text: &str, cursor: &mut Cursor<'_>, line: Line<'_>) -> Result<Definition> {
    // skip the opening quote
    let body = line
        .text
        .char_indices()
        .nth(1)
        .map_or("", |(index, _)| &line.text[index..]);

    let Some(close) = body.find(CLOSING_QUOTES) else {
        return Err(ParseError::at(text, line.end(), "closing quote"));
    };

    let term = body[..close].trim();
    if term.is_empty() {
        return Err(ParseError::at(text, line.start, "defined term"));
    }

    let after_quote = body[close..]
        .char_indices()
        .nth(1)
        .map_or("", |(index, _)| &body[close + index..]);

    cursor.advance();

    let mut statements: Vec<DefinitionStatement> = Vec::new();
    while let Some((next, kind)) = cursor.peek() {
        if starts_definition(&next) {
            break;
        }

        if matches!(kind, LineKind::Item { .. }) {
            let blocklist = cursor.blocklist();
            match statements.last_mut() {
                Some(last) if last.blocklist.is_none() => last.blocklist = Some(blocklist),
                _ => statements.push(DefinitionStatement {
                    content: None,
                    blocklist: Some(blocklist),
                }),
            }
            continue;
        }

        statements.push(DefinitionStatement {
            content: Some(next.text.to_string()),
            blocklist: None,
        });
        cursor.advance();
    }

    Ok(Definition {
        term: term.to_string(),
        content: after_quote.to_string(),
        statements,
        span: line.span(),
    })
}
