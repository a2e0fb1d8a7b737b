//! Serialization of [`XmlElement`] trees with `quick-xml`.

use std::io::Write;

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::node::{XmlElement, XmlNode};
use crate::config::XML_INDENT;
use crate::error::{MarkupError, Result};

/// Serialize a document with an XML declaration and indentation.
///
/// Elements without children are written as empty elements, and elements
/// with text stay on one line, so indentation never changes text content.
/// Text escapes `<`, `>` and `&`; attribute values also escape quotes.
///
/// # Examples
/// ```
/// use bylaw_markup::xml::{to_xml_string, XmlElement};
///
/// let root = XmlElement::new("body").with_child(XmlElement::text_element("p", "a < b"));
/// let xml = to_xml_string(&root).unwrap();
/// assert!(xml.contains("<p>a &lt; b</p>"));
/// ```
pub fn to_xml_string(root: &XmlElement) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', XML_INDENT);
    write_event(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, root)?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(String::from_utf8(bytes)?)
}

/// Serialize an element on a single line, without a declaration.
///
/// Used to pre-build fragments that are later spliced in as
/// [`XmlNode::Raw`].
pub fn to_fragment_string(element: &XmlElement) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, element)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &XmlElement) -> Result<()> {
    let mut start = BytesStart::new(element.name());
    for (name, value) in element.attributes() {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.is_empty() {
        return write_event(writer, Event::Empty(start));
    }

    write_event(writer, Event::Start(start))?;
    for child in element.children() {
        match child {
            XmlNode::Element(child) => write_element(writer, child)?,
            XmlNode::Text(text) => {
                let escaped = partial_escape(text.as_str());
                write_event(writer, Event::Text(BytesText::from_escaped(escaped)))?;
            }
            XmlNode::Raw(fragment) => {
                let raw = BytesText::from_escaped(fragment.as_str());
                write_event(writer, Event::Text(raw))?;
            }
        }
    }
    write_event(writer, Event::End(BytesEnd::new(element.name())))
}

fn write_event<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(MarkupError::XmlWrite)
}
