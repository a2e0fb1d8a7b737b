//! Identifier composition.
//!
//! Every addressable element carries a dotted identifier derived from its
//! position in the hierarchy, e.g. `section-5.subsection-2.list0.a`. All
//! functions here are pure: callers pass the accumulated prefix in.

use crate::context::{Ancestor, ContainerKind};

/// Remove every `(` and `)` from a number token.
///
/// # Examples
/// ```
/// use bylaw_markup::ids::strip_brackets;
///
/// assert_eq!(strip_brackets("(1)"), "1");
/// assert_eq!(strip_brackets("(iv)"), "iv");
/// assert_eq!(strip_brackets("1.2"), "1.2");
/// ```
#[must_use]
pub fn strip_brackets(token: &str) -> String {
    token.chars().filter(|c| !matches!(c, '(' | ')')).collect()
}

/// Identifier of a chapter or part.
///
/// When the enclosing container is the complementary kind and has a
/// number, its identifier is prepended, so a part inside chapter 2 becomes
/// `chapter-2.part-1`.
///
/// # Arguments
/// * `kind` - Kind of the container being identified
/// * `num` - Its number
/// * `enclosing` - The container it sits in, if any
#[must_use]
pub fn container_id(kind: ContainerKind, num: &str, enclosing: Option<&Ancestor>) -> String {
    let id = format!("{}-{num}", kind.as_str());

    match enclosing {
        Some(Ancestor {
            kind: enclosing_kind,
            num: Some(enclosing_num),
        }) if *enclosing_kind == kind.complement() => {
            format!("{}-{enclosing_num}.{id}", enclosing_kind.as_str())
        }
        _ => id,
    }
}

#[must_use]
pub fn section_id(num: &str) -> String {
    format!("section-{num}")
}

/// Identifier of a subsection.
///
/// Numbered statements use their number without brackets; others fall back
/// to their position among the section's subsections.
#[must_use]
pub fn subsection_id(prefix: &str, statement_num: Option<&str>, ordinal: usize) -> String {
    match statement_num {
        Some(num) => format!("{prefix}{}", strip_brackets(num)),
        None => format!("{prefix}subsection-{ordinal}"),
    }
}

#[must_use]
pub fn blocklist_id(prefix: &str, ordinal: usize) -> String {
    format!("{prefix}list{ordinal}")
}

/// Identifier of a list item: `{prefix}list{ordinal}.{marker}`.
///
/// # Examples
/// ```
/// use bylaw_markup::ids::blocklist_item_id;
///
/// assert_eq!(
///     blocklist_item_id("section-5.subsection-2.", 0, "(a)"),
///     "section-5.subsection-2.list0.a"
/// );
/// ```
#[must_use]
pub fn blocklist_item_id(prefix: &str, ordinal: usize, marker: &str) -> String {
    format!("{}.{}", blocklist_id(prefix, ordinal), strip_brackets(marker))
}

/// Sanitize a defined term for use in identifiers.
///
/// Every character outside `[A-Za-z0-9_-]` becomes `_`, one for one.
///
/// # Examples
/// ```
/// use bylaw_markup::ids::term_id;
///
/// assert_eq!(term_id("affected land (rural)"), "affected_land__rural_");
/// ```
#[must_use]
pub fn term_id(term: &str) -> String {
    term.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[must_use]
pub fn definition_id(term: &str) -> String {
    format!("def-term-{}", term_id(term))
}

/// Identifier of the n-th subsection of a definition; 0 is the definition's
/// own text.
#[must_use]
pub fn definition_subsection_id(definition_id: &str, index: usize) -> String {
    format!("{definition_id}.subsection-{index}")
}

/// Prefix for identifiers of an element's children.
#[must_use]
pub fn child_prefix(id: &str) -> String {
    format!("{id}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ancestor(kind: ContainerKind, num: Option<&str>) -> Ancestor {
        Ancestor {
            kind,
            num: num.map(String::from),
        }
    }

    #[test]
    fn test_part_inside_numbered_chapter() {
        let chapter = ancestor(ContainerKind::Chapter, Some("2"));
        assert_eq!(
            container_id(ContainerKind::Part, "1", Some(&chapter)),
            "chapter-2.part-1"
        );
    }

    #[test]
    fn test_chapter_inside_numbered_part() {
        let part = ancestor(ContainerKind::Part, Some("3"));
        assert_eq!(
            container_id(ContainerKind::Chapter, "4", Some(&part)),
            "part-3.chapter-4"
        );
    }

    #[test]
    fn test_cross_prefix_omitted_without_number() {
        let chapter = ancestor(ContainerKind::Chapter, None);
        assert_eq!(
            container_id(ContainerKind::Part, "2", Some(&chapter)),
            "part-2"
        );
        assert_eq!(container_id(ContainerKind::Chapter, "1", None), "chapter-1");
    }

    #[test]
    fn test_cross_prefix_only_for_complementary_kind() {
        let part = ancestor(ContainerKind::Part, Some("1"));
        assert_eq!(container_id(ContainerKind::Part, "2", Some(&part)), "part-2");
    }

    #[test]
    fn test_section_id() {
        assert_eq!(section_id("12A"), "section-12A");
    }

    #[test]
    fn test_subsection_id_numbered() {
        assert_eq!(subsection_id("section-1.", Some("(1)"), 0), "section-1.1");
        assert_eq!(subsection_id("section-1.", Some("1.2"), 3), "section-1.1.2");
    }

    #[test]
    fn test_subsection_id_positional_fallback() {
        assert_eq!(
            subsection_id("section-1.", None, 2),
            "section-1.subsection-2"
        );
    }

    #[test]
    fn test_blocklist_item_id() {
        assert_eq!(
            blocklist_item_id("section-5.subsection-2.", 0, "(a)"),
            "section-5.subsection-2.list0.a"
        );
        assert_eq!(blocklist_item_id("section-5.1.", 1, "(iv)"), "section-5.1.list1.iv");
    }

    #[test]
    fn test_term_id() {
        assert_eq!(term_id("affected land (rural)"), "affected_land__rural_");
        assert_eq!(term_id("by-law_2"), "by-law_2");
        assert_eq!(term_id("café"), "caf_");
    }

    #[test]
    fn test_term_id_idempotent() {
        for term in ["affected land (rural)", "council", "“quoted”", "a.b/c"] {
            let once = term_id(term);
            assert_eq!(term_id(&once), once);
        }
    }

    #[test]
    fn test_definition_ids() {
        let id = definition_id("affected land");
        assert_eq!(id, "def-term-affected_land");
        assert_eq!(
            definition_subsection_id(&id, 0),
            "def-term-affected_land.subsection-0"
        );
    }

    #[test]
    fn test_child_prefix() {
        assert_eq!(child_prefix("section-1"), "section-1.");
    }
}
