//! Top-down walk from a syntax tree to an `akomaNtoso` element.

use chrono::NaiveDate;
use tracing::debug;

use bylaw_syntax::{DefinitionsGrammar, Document, Heading, Node, NodeKind, Preamble, Section};

use super::content::{paragraph, subsection};
use super::definitions::definitions_list;
use crate::config::{ACT_CONTAINS, AKN_NAMESPACE};
use crate::context::{AncestorContext, ContainerKind};
use crate::dispatch::definitions_for;
use crate::error::{MarkupError, Result};
use crate::ids;
use crate::metadata::{emit_meta, Metadata};
use crate::xml::XmlElement;

/// Transforms syntax trees parsed from one source text.
///
/// Holds only borrowed, read-only inputs; all walk state is passed down as
/// [`AncestorContext`] values, so one transformer may be used from several
/// threads at once.
pub struct Transformer<'a, G: DefinitionsGrammar + ?Sized> {
    source: &'a str,
    grammar: &'a G,
    metadata: &'a Metadata,
    generated: NaiveDate,
}

impl<'a, G: DefinitionsGrammar + ?Sized> Transformer<'a, G> {
    /// Create a new transformer.
    ///
    /// # Arguments
    /// * `source` - The text the syntax tree was parsed from
    /// * `grammar` - Sub-grammar used to re-read definitions sections
    /// * `metadata` - Identity fields for the `meta` block
    /// * `generated` - Date of this conversion
    #[must_use]
    pub fn new(
        source: &'a str,
        grammar: &'a G,
        metadata: &'a Metadata,
        generated: NaiveDate,
    ) -> Self {
        Self {
            source,
            grammar,
            metadata,
            generated,
        }
    }

    /// Transform a whole document.
    ///
    /// Either the complete `akomaNtoso` element is returned, or an error and
    /// nothing else.
    pub fn transform(&self, document: &Document) -> Result<XmlElement> {
        let mut act = XmlElement::new("act")
            .with_attr("contains", ACT_CONTAINS)
            .with_child(emit_meta(self.metadata, self.generated));

        if let Some(preamble) = document.preamble.as_ref().and_then(emit_preamble) {
            act.push(preamble);
        }

        let root = AncestorContext::root();
        let mut body = XmlElement::new("body");
        for (ordinal, node) in document.body.iter().enumerate() {
            for element in self.emit(node, &root.at(ordinal))? {
                body.push(element);
            }
        }

        Ok(XmlElement::new("akomaNtoso")
            .with_attr("xmlns", AKN_NAMESPACE)
            .with_child(act.with_child(body)))
    }

    /// Emit a body node.
    ///
    /// Returns zero or more sibling elements: a heading-less container
    /// contributes its children in its own place.
    pub fn emit(&self, node: &Node, ctx: &AncestorContext) -> Result<Vec<XmlElement>> {
        match node {
            Node::Chapter(chapter) => self.emit_container(
                ContainerKind::Chapter,
                chapter.heading.as_ref(),
                &chapter.children,
                ctx,
            ),
            Node::Part(part) => {
                self.emit_container(ContainerKind::Part, part.heading.as_ref(), &part.children, ctx)
            }
            Node::Section(section) => {
                if ctx.parent.is_none() {
                    return Err(unexpected(node.kind(), ctx));
                }
                Ok(vec![self.emit_section(section)?])
            }
        }
    }

    fn emit_container(
        &self,
        kind: ContainerKind,
        heading: Option<&Heading>,
        children: &[Node],
        ctx: &AncestorContext,
    ) -> Result<Vec<XmlElement>> {
        // Chapters and parts nest at most one inside the other.
        let same_kind_parent = ctx.parent.as_ref().is_some_and(|p| p.kind == kind);
        if same_kind_parent || ctx.grandparent.is_some() {
            return Err(unexpected(node_kind(kind), ctx));
        }

        let inner = ctx.within(kind, heading.map(|h| h.num.as_str()));
        let mut elements = Vec::new();
        for (ordinal, child) in children.iter().enumerate() {
            elements.extend(self.emit(child, &inner.at(ordinal))?);
        }

        let Some(heading) = heading else {
            return Ok(elements);
        };

        let id = ids::container_id(kind, &heading.num, ctx.parent.as_ref());
        let container = XmlElement::new(kind.as_str())
            .with_attr("id", id)
            .with_child(XmlElement::text_element("num", heading.num.as_str()))
            .with_child(XmlElement::text_element("heading", heading.title.as_str()))
            .with_children(elements);

        Ok(vec![container])
    }

    /// Emit a section in definitions mode or subsection mode.
    pub fn emit_section(&self, section: &Section) -> Result<XmlElement> {
        let id = ids::section_id(&section.num);
        let element = XmlElement::new("section")
            .with_attr("id", id.as_str())
            .with_child(XmlElement::text_element("num", format!("{}.", section.num)))
            .with_child(XmlElement::text_element("heading", section.title.as_str()));

        if let Some(definitions) = definitions_for(section, self.source, self.grammar) {
            return Ok(element.with_child(definitions_list(definitions, &id)?));
        }

        let ctx = AncestorContext::root().with_prefix(&id);
        let subsections = section
            .subsections
            .iter()
            .enumerate()
            .map(|(ordinal, sub)| subsection(sub, &ctx.at(ordinal)));

        debug!(section = %section.num, subsections = section.subsections.len(), "Emitted section");
        Ok(element.with_children(subsections))
    }
}

/// Preamble paragraphs, skipping the "Preamble" label itself.
fn emit_preamble(preamble: &Preamble) -> Option<XmlElement> {
    let paragraphs: Vec<_> = preamble
        .statements
        .iter()
        .filter(|statement| !is_preamble_label(&statement.content))
        .map(|statement| paragraph(&statement.content))
        .collect();

    (!paragraphs.is_empty()).then(|| XmlElement::new("preamble").with_children(paragraphs))
}

fn is_preamble_label(text: &str) -> bool {
    text.get(..8)
        .is_some_and(|head| head.eq_ignore_ascii_case("preamble"))
}

fn node_kind(kind: ContainerKind) -> NodeKind {
    match kind {
        ContainerKind::Chapter => NodeKind::Chapter,
        ContainerKind::Part => NodeKind::Part,
    }
}

fn unexpected(kind: NodeKind, ctx: &AncestorContext) -> MarkupError {
    MarkupError::UnexpectedNode {
        kind: kind.as_str(),
        context: ctx.describe(),
    }
}
