//! End-to-end conversion tests over by-law fixtures.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use roxmltree::{Document, Node};

use bylaw_markup::xml::{find_child, find_descendant, get_tag_name, get_text};
use bylaw_markup::{build_toc, convert_bylaw, ConvertOptions, MarkupError, Metadata, Transformer};
use bylaw_syntax::BylawParser;

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn options() -> ConvertOptions {
    ConvertOptions {
        generation_date: NaiveDate::from_ymd_opt(2024, 6, 30),
        ..ConvertOptions::default()
    }
}

fn convert_rates() -> String {
    convert_bylaw(&load_fixture("rates_bylaw.txt"), &options()).unwrap()
}

fn by_id<'a, 'input>(doc: &'a Document<'input>, id: &str) -> Node<'a, 'input> {
    doc.descendants()
        .find(|n| n.attribute("id") == Some(id))
        .unwrap_or_else(|| panic!("no element with id {id}"))
}

/// Every id in the body, in document order.
fn body_ids(doc: &Document<'_>) -> Vec<String> {
    let body = find_descendant(doc.root_element(), "body").unwrap();
    body.descendants()
        .filter_map(|n| n.attribute("id").map(String::from))
        .collect()
}

#[test]
fn test_rates_bylaw_identifiers() {
    let xml = convert_rates();
    let doc = Document::parse(&xml).unwrap();

    assert_eq!(
        body_ids(&doc),
        vec![
            "chapter-1",
            "section-1",
            "section-1.definitions",
            "def-term-affected_land__rural_",
            "def-term-affected_land__rural_.subsection-0",
            "def-term-council",
            "def-term-council.subsection-0",
            "def-term-property",
            "def-term-property.subsection-0",
            "def-term-property.subsection-1",
            "def-term-property.subsection-1.list0",
            "def-term-property.subsection-1.list0.a",
            "def-term-property.subsection-1.list0.b",
            "def-term-rate",
            "def-term-rate.subsection-0",
            "section-2",
            "section-2.1",
            "section-2.2",
            "section-2.2.list1",
            "section-2.2.list1.a",
            "section-2.2.list1.b",
            "section-2.2.list1.b.list1",
            "section-2.2.list1.b.list1.i",
            "section-2.2.list1.b.list1.ii",
            "section-2.2.list1.c",
            "chapter-2",
            "chapter-2.part-1",
            "section-3",
            "section-3.1",
            "section-3.2",
            "chapter-2.part-2",
            "section-4",
            "section-4.subsection-0",
            "section-5",
            "section-5.subsection-0",
            "section-5.subsection-0.list0",
            "section-5.subsection-0.list0.a",
            "section-5.subsection-0.list0.b",
        ]
    );
}

#[test]
fn test_identifiers_unique() {
    let xml = convert_rates();
    let doc = Document::parse(&xml).unwrap();
    let ids = body_ids(&doc);

    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn test_heading_less_part_flattened() {
    let xml = convert_rates();
    let doc = Document::parse(&xml).unwrap();
    let chapter = by_id(&doc, "chapter-1");

    let children: Vec<_> = chapter
        .children()
        .filter(Node::is_element)
        .map(get_tag_name)
        .collect();
    assert_eq!(children, vec!["num", "heading", "section", "section"]);
    assert_eq!(get_text(find_child(chapter, "heading").unwrap()), "INTERPRETATION");
}

#[test]
fn test_definitions_markup() {
    let xml = convert_rates();
    assert!(xml.contains(
        r##"<p>"<def refersTo="#term-affected_land__rural_">affected land (rural)</def>" means land in respect of which an application has been lodged in terms of section 17(1);</p>"##
    ));

    let doc = Document::parse(&xml).unwrap();
    let list = by_id(&doc, "section-1.definitions");
    let intro = find_child(list, "intro").and_then(|i| find_child(i, "p")).unwrap();
    assert_eq!(
        get_text(intro),
        "In this by-law, unless the context indicates otherwise:"
    );

    let def = find_descendant(by_id(&doc, "def-term-council"), "def").unwrap();
    assert_eq!(def.attribute("refersTo"), Some("#term-council"));
    assert_eq!(def.text(), Some("council"));
}

#[test]
fn test_nested_list_introduction() {
    let xml = convert_rates();
    let doc = Document::parse(&xml).unwrap();

    let outer = by_id(&doc, "section-2.2.list1");
    let intro = find_child(outer, "listIntroduction").unwrap();
    assert_eq!(get_text(intro), "The council must levy rates on—");

    let nested = by_id(&doc, "section-2.2.list1.b.list1");
    let intro = find_child(nested, "listIntroduction").unwrap();
    assert_eq!(get_text(intro), "business and commercial property, including—");
}

#[test]
fn test_definitions_fallback_renders_subsections() {
    let xml = convert_rates();
    let doc = Document::parse(&xml).unwrap();
    let section = by_id(&doc, "section-4");

    assert_eq!(get_text(find_child(section, "num").unwrap()), "4.");
    assert!(find_child(section, "list").is_none());
    let p = find_descendant(by_id(&doc, "section-4.subsection-0"), "p").unwrap();
    assert_eq!(
        get_text(p),
        "Words used in this Chapter have the meaning given in section 1."
    );
}

#[test]
fn test_preamble_label_not_emitted() {
    let xml = convert_rates();
    let doc = Document::parse(&xml).unwrap();
    let preamble = find_descendant(doc.root_element(), "preamble").unwrap();

    let lines: Vec<_> = preamble
        .children()
        .filter(Node::is_element)
        .map(get_text)
        .collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "CITY OF CAPE TOWN");
    assert!(!lines.iter().any(|l| l == "PREAMBLE"));
}

#[test]
fn test_metadata_from_yaml() {
    let metadata = Metadata::from_yaml_file(&fixture_path("metadata.yaml")).unwrap();
    let options = ConvertOptions {
        metadata,
        ..options()
    };
    let xml = convert_bylaw(&load_fixture("rates_bylaw.txt"), &options).unwrap();

    assert!(xml.contains(r#"<FRBRuri value="/za/by-law/cape-town/2002/property-rates"/>"#));
    assert!(xml.contains(r#"<FRBRalias value="Property Rates By-law"/>"#));
    assert!(xml.contains(r#"<FRBRdate date="2024-06-30" name="Generation"/>"#));
    assert!(xml.contains(r#"number="5897""#));
}

#[test]
fn test_conversion_deterministic() {
    assert_eq!(convert_rates(), convert_rates());
}

#[test]
fn test_concurrent_conversions_agree() {
    let text = load_fixture("rates_bylaw.txt");
    let expected = convert_bylaw(&text, &options()).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| convert_bylaw(&text, &options()).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_shared_tree_transformed_from_threads() {
    let text = load_fixture("rates_bylaw.txt");
    let parser = BylawParser::default();
    let document = parser.parse(&text).unwrap();
    let metadata = Metadata::default();
    let date = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    let transformer = Transformer::new(&text, &parser, &metadata, date);

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| transformer.transform(&document).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in &results[1..] {
        assert_eq!(result, &results[0]);
    }
}

#[test]
fn test_parse_error_position() {
    let err = convert_bylaw(&load_fixture("empty_chapter.txt"), &options()).unwrap_err();

    let MarkupError::Parse(parse) = &err else {
        panic!("expected parse error, got {err:?}");
    };
    assert_eq!(parse.line, 4);
    assert_eq!(parse.column, 1);
    assert_eq!(parse.expected, "section");
    assert_eq!(
        err.to_string(),
        "Parse error at line 4, column 1: expected section"
    );
}

#[test]
fn test_toc_from_converted_document() {
    let xml = convert_rates();
    let toc = build_toc(&xml).unwrap();

    let top: Vec<_> = toc.iter().filter_map(|e| e.id.as_deref()).collect();
    assert_eq!(top, vec!["chapter-1", "chapter-2"]);

    let parts: Vec<_> = toc[1].children.iter().map(|e| e.kind.as_str()).collect();
    assert_eq!(parts, vec!["part", "part"]);
    assert_eq!(toc[1].children[1].heading.as_deref(), Some("Exemptions"));

    let sections: Vec<_> = toc[0]
        .children
        .iter()
        .map(|e| (e.num.as_deref(), e.heading.as_deref()))
        .collect();
    assert_eq!(
        sections,
        vec![
            (Some("1"), Some("Definitions")),
            (Some("2"), Some("Application of by-law"))
        ]
    );
}
