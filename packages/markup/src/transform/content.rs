//! Subsections, lists and list items.

use bylaw_syntax::{Blocklist, BlocklistItem, Statement, Subsection};

use crate::context::AncestorContext;
use crate::ids;
use crate::xml::XmlElement;

/// Render a subsection at `ctx.ordinal` among its siblings.
///
/// The subsection's content is a single paragraph, or a list whose
/// introduction is the statement's own text.
pub(crate) fn subsection(subsection: &Subsection, ctx: &AncestorContext) -> XmlElement {
    let statement = &subsection.statement;
    let id = ids::subsection_id(&ctx.id_prefix, statement.num(), ctx.ordinal);

    let mut element = XmlElement::new("subsection").with_attr("id", id.as_str());
    if let Statement::Numbered(numbered) = statement {
        element.push(XmlElement::text_element("num", numbered.num.as_str()));
    }

    let content = content(
        statement.content(),
        subsection.blocklist.as_ref(),
        &ctx.with_prefix(&id),
    );
    element.with_child(content)
}

/// A `content` element holding either a paragraph or a list.
///
/// `ctx.ordinal` becomes the list ordinal.
pub(crate) fn content(
    text: Option<&str>,
    blocklist: Option<&Blocklist>,
    ctx: &AncestorContext,
) -> XmlElement {
    let content = XmlElement::new("content");
    match (blocklist, text) {
        (Some(list), intro) => content.with_child(block_list(list, intro, ctx)),
        (None, Some(text)) => content.with_child(paragraph(text)),
        (None, None) => content,
    }
}

/// Render a list, its optional introduction and its items.
pub(crate) fn block_list(
    list: &Blocklist,
    intro: Option<&str>,
    ctx: &AncestorContext,
) -> XmlElement {
    let id = ids::blocklist_id(&ctx.id_prefix, ctx.ordinal);
    let mut element = XmlElement::new("blockList").with_attr("id", id.as_str());

    if let Some(intro) = intro {
        element.push(XmlElement::text_element("listIntroduction", intro));
    }

    for (index, entry) in list.items.iter().enumerate() {
        element.push(item(entry, ctx, index));
    }

    element
}

/// Render one list item.
///
/// An item with a nested list mirrors a subsection: its text introduces the
/// nested list, which takes the item's position as its ordinal.
fn item(item: &BlocklistItem, ctx: &AncestorContext, index: usize) -> XmlElement {
    let id = ids::blocklist_item_id(&ctx.id_prefix, ctx.ordinal, &item.num);
    let element = XmlElement::new("item")
        .with_attr("id", id.as_str())
        .with_child(XmlElement::text_element("num", item.num.as_str()));

    match &item.blocklist {
        Some(nested) => {
            let intro = (!item.content.is_empty()).then_some(item.content.as_str());
            element.with_child(block_list(nested, intro, &ctx.with_prefix(&id).at(index)))
        }
        None => element.with_child(paragraph(&item.content)),
    }
}

pub(crate) fn paragraph(text: &str) -> XmlElement {
    XmlElement::text_element("p", text)
}
