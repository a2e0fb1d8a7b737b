//! Table of contents over produced XML.

use roxmltree::{Document, Node};
use serde::Serialize;

use crate::error::{MarkupError, Result};
use crate::xml::{find_descendant, get_tag_name, heading, id, num, toc_children};

/// One chapter, part or section in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Element name: `chapter`, `part` or `section`.
    pub kind: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub num: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TocEntry>,
}

/// Build the table of contents of an Akoma Ntoso document.
///
/// # Arguments
/// * `xml` - Serialized document, as produced by [`crate::convert_bylaw`]
///
/// # Returns
/// Top-level entries in document order, or `MissingElement` when the
/// document has no `body`.
pub fn build_toc(xml: &str) -> Result<Vec<TocEntry>> {
    let doc = Document::parse(xml)?;
    let body = find_descendant(doc.root_element(), "body").ok_or_else(|| {
        MarkupError::MissingElement {
            element: "body".to_string(),
            context: "table of contents".to_string(),
        }
    })?;

    Ok(entries(body))
}

fn entries(node: Node<'_, '_>) -> Vec<TocEntry> {
    toc_children(node)
        .map(|child| TocEntry {
            kind: get_tag_name(child).to_string(),
            id: id(child).map(String::from),
            num: num(child),
            heading: heading(child).filter(|h| !h.is_empty()),
            children: entries(child),
        })
        .collect()
}

/// Render entries as YAML.
pub fn to_yaml(entries: &[TocEntry]) -> Result<String> {
    Ok(serde_yaml_ng::to_string(entries)?)
}

/// Render entries as pretty-printed JSON.
pub fn to_json(entries: &[TocEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}
