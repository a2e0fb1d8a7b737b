//! Rendering-mode decision for definitions sections.
//!
//! A section whose title starts with "definition" or "interpretation" is
//! re-read with the definitions sub-grammar over the exact source range of
//! its content. When that fails the section renders as ordinary
//! subsections; the failure is logged, never returned.

use regex::Regex;
use std::sync::LazyLock;

use bylaw_syntax::{DefinitionsGrammar, DefinitionsSection, Section};
use tracing::debug;

/// Case-insensitive, anchored title prefix.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DEFINITIONS_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:definition|interpretation)").expect("valid regex"));

/// Check whether a section title announces a definitions section.
///
/// # Examples
/// ```
/// use bylaw_markup::dispatch::is_definitions_title;
///
/// assert!(is_definitions_title("Interpretation of terms"));
/// assert!(!is_definitions_title("Redefinitions of boundaries"));
/// ```
pub fn is_definitions_title(title: &str) -> bool {
    DEFINITIONS_TITLE.is_match(title)
}

/// The section's definitions, if it is a definitions section that the
/// sub-grammar accepts.
///
/// The verdict is cached on the section: the grammar runs at most once per
/// section, and later calls return the stored result.
///
/// # Arguments
/// * `section` - Section being rendered
/// * `source` - The full text the section was parsed from
/// * `grammar` - Definitions sub-grammar
pub fn definitions_for<'s, G>(
    section: &'s Section,
    source: &str,
    grammar: &G,
) -> Option<&'s DefinitionsSection>
where
    G: DefinitionsGrammar + ?Sized,
{
    section.definitions_or_init(|| {
        if !is_definitions_title(&section.title) {
            return None;
        }

        let span = section.content_span;
        let Some(text) = source.get(..span.end) else {
            debug!(
                section = %section.num,
                end = span.end,
                "Section content lies outside the source text, rendering as subsections"
            );
            return None;
        };

        match grammar.parse_definitions(text, span.start) {
            Ok(definitions) => {
                debug!(
                    section = %section.num,
                    definitions = definitions.definitions.len(),
                    "Rendering section as definitions"
                );
                Some(definitions)
            }
            Err(err) => {
                debug!(
                    section = %section.num,
                    line = err.line,
                    column = err.column,
                    expected = %err.expected,
                    "Definitions sub-parse failed, rendering as subsections"
                );
                None
            }
        }
    })
}
