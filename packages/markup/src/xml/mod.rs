//! XML value tree, serializer and navigation helpers.

pub mod navigate;
pub mod node;
pub mod writer;

pub use navigate::{
    chapters, find_child, find_children, find_descendant, get_tag_name, get_text, has_tag,
    heading, id, num, parts, sections, toc_children,
};
pub use node::{XmlElement, XmlNode};
pub use writer::{to_fragment_string, to_xml_string};
