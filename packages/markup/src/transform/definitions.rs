//! Definitions sections rendered as a list of points.

use bylaw_syntax::{Definition, DefinitionsSection};

use super::content::{content, paragraph};
use crate::context::AncestorContext;
use crate::error::Result;
use crate::ids;
use crate::xml::{to_fragment_string, XmlElement};

/// Render a section's definitions.
///
/// # Arguments
/// * `definitions` - Output of the definitions sub-grammar
/// * `section_id` - Identifier of the owning section
pub(crate) fn definitions_list(
    definitions: &DefinitionsSection,
    section_id: &str,
) -> Result<XmlElement> {
    let mut list = XmlElement::new("list").with_attr("id", format!("{section_id}.definitions"));

    if !definitions.intro.is_empty() {
        list.push(XmlElement::new("intro").with_child(paragraph(&definitions.intro)));
    }

    for definition in &definitions.definitions {
        list.push(point(definition)?);
    }

    Ok(list)
}

/// One definition: its own text as subsection 0, then each nested
/// statement as a further subsection.
fn point(definition: &Definition) -> Result<XmlElement> {
    let id = ids::definition_id(&definition.term);

    let own_text = XmlElement::new("subsection")
        .with_attr("id", ids::definition_subsection_id(&id, 0))
        .with_child(XmlElement::new("content").with_raw(defining_paragraph(definition)?));

    let mut point = XmlElement::new("point")
        .with_attr("id", id.as_str())
        .with_child(own_text);

    for (index, statement) in definition.statements.iter().enumerate() {
        let subsection_id = ids::definition_subsection_id(&id, index + 1);
        let ctx = AncestorContext::root().with_prefix(&subsection_id).at(index);
        point.push(
            XmlElement::new("subsection")
                .with_attr("id", subsection_id.as_str())
                .with_child(content(
                    statement.content.as_deref(),
                    statement.blocklist.as_ref(),
                    &ctx,
                )),
        );
    }

    Ok(point)
}

/// Pre-build `<p>"<def refersTo="#term-x">term</def>" means ...</p>` on one
/// line. Term and content are escaped; only the markup is structural.
fn defining_paragraph(definition: &Definition) -> Result<String> {
    let def = XmlElement::new("def")
        .with_attr("refersTo", format!("#term-{}", ids::term_id(&definition.term)))
        .with_text(definition.term.as_str());

    let p = XmlElement::new("p")
        .with_text("\"")
        .with_child(def)
        .with_text(format!("\"{}", definition.content));

    to_fragment_string(&p)
}
