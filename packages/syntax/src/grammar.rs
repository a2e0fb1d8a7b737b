//! The sub-grammar seam.

use crate::error::Result;
use crate::tree::DefinitionsSection;

/// A grammar that can re-read part of a document as a list of definitions.
///
/// Implementations must report error positions relative to `text`, not to
/// `text[start..]`, so a failure inside a section body points at the right
/// place in the whole document.
pub trait DefinitionsGrammar: Send + Sync {
    /// Parse `text[start..]` with the definitions entry point.
    ///
    /// # Arguments
    ///
    /// * `text` - Source text, ending where the section content ends
    /// * `start` - Offset where the section content begins
    fn parse_definitions(&self, text: &str, start: usize) -> Result<DefinitionsSection>;
}
