//! Navigation over produced XML.
//!
//! Consumers such as the table-of-contents builder read the output back
//! with `roxmltree`; these helpers match on local names so the Akoma Ntoso
//! namespace does not get in the way.

use roxmltree::Node;

/// Element names that take part in the table of contents.
pub const TOC_ELEMENTS: [&str; 3] = ["part", "chapter", "section"];

/// Get the tag name without namespace.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use bylaw_markup::xml::get_tag_name;
///
/// let xml = r#"<akomaNtoso xmlns="http://www.akomantoso.org/2.0"><act/></akomaNtoso>"#;
/// let doc = Document::parse(xml).unwrap();
/// let act = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(act), "act");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with the given local name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Find the first child element with the given local name.
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| has_tag(*child, tag))
}

/// Find all child elements with the given local name.
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| has_tag(*child, tag))
}

/// Find the first descendant element (self included) with the given local name.
pub fn find_descendant<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.descendants().find(|child| has_tag(*child, tag))
}

/// Get the text content of a node, trimmed.
pub fn get_text(node: Node<'_, '_>) -> String {
    node.text()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Number of a container, from its `num` child with dots removed.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use bylaw_markup::xml::num;
///
/// let doc = Document::parse(r#"<section><num>12A.</num></section>"#).unwrap();
/// assert_eq!(num(doc.root_element()), Some("12A".to_string()));
/// ```
pub fn num(node: Node<'_, '_>) -> Option<String> {
    find_child(node, "num").map(|n| get_text(n).replace('.', ""))
}

/// Heading text of a container.
pub fn heading(node: Node<'_, '_>) -> Option<String> {
    find_child(node, "heading").map(get_text)
}

/// `id` attribute of an element.
pub fn id<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.attribute("id")
}

pub fn chapters<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    find_children(node, "chapter")
}

pub fn parts<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    find_children(node, "part")
}

pub fn sections<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    find_children(node, "section")
}

/// Direct children that belong in a table of contents, in document order.
pub fn toc_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(|child| child.is_element() && TOC_ELEMENTS.contains(&get_tag_name(*child)))
}
