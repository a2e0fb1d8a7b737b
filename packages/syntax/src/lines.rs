//! Line scanning and classification.

use regex::Regex;
use std::sync::LazyLock;

use crate::tree::Span;

/// `CHAPTER 1 - Title`, case-insensitive. Group 2 is a title after a
/// separator, group 3 a title after whitespace only.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CHAPTER_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^chapter\s+([0-9a-z]+)(?:\s*[:.\-–—]\s*(.*)|\s+(.*))?$")
        .expect("valid regex")
});

/// `PART 2: Title`, case-insensitive, with the same groups as
/// [`CHAPTER_HEADING`].
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PART_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^part\s+([0-9a-z]+)(?:\s*[:.\-–—]\s*(.*)|\s+(.*))?$")
        .expect("valid regex")
});

/// `1. Title` or `12A.`; the dot must be followed by whitespace or nothing.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SECTION_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+[A-Za-z]*)\.(?:\s+(.*))?$").expect("valid regex"));

/// `(1) text` or `1.2 text`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NUMBERED_STATEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\(\d+[A-Za-z]*\)|\d+\.\d+[A-Za-z]*)(?:\s+(.*))?$").expect("valid regex")
});

/// `(a) text`, `(iv) text`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BLOCKLIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\([A-Za-z]{1,5}\))(?:\s+(.*))?$").expect("valid regex"));

/// A non-blank source line with surrounding whitespace removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Line<'t> {
    pub text: &'t str,

    /// Absolute offset of the first non-whitespace character.
    pub start: usize,

    /// Leading whitespace, in bytes.
    pub indent: usize,
}

impl Line<'_> {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end())
    }
}

/// A piece of a line together with its absolute offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fragment<'t> {
    pub text: &'t str,
    pub start: usize,
}

impl Fragment<'_> {
    pub fn span(&self) -> Span {
        Span::new(self.start, self.start + self.text.len())
    }
}

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind<'t> {
    ChapterHeading {
        num: &'t str,
        title: &'t str,
    },
    PartHeading {
        num: &'t str,
        title: &'t str,
    },
    SectionTitle {
        num: &'t str,
        rest: Option<Fragment<'t>>,
    },
    Numbered {
        num: &'t str,
        content: Option<Fragment<'t>>,
    },
    Item {
        marker: &'t str,
        content: Option<Fragment<'t>>,
    },
    Plain,
}

/// Split `text[from..]` into non-blank lines with absolute offsets.
///
/// `from` must lie on a character boundary.
pub(crate) fn scan_lines(text: &str, from: usize) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let Some(tail) = text.get(from..) else {
        return lines;
    };

    let mut offset = from;
    for raw in tail.split_inclusive('\n') {
        let line_start = offset;
        offset += raw.len();

        let content = raw.trim_end_matches(['\n', '\r']);
        let without_indent = content.trim_start();
        let trimmed = without_indent.trim_end();
        if trimmed.is_empty() {
            continue;
        }

        let indent = content.len() - without_indent.len();
        lines.push(Line {
            text: trimmed,
            start: line_start + indent,
            indent,
        });
    }

    lines
}

/// Return the capture group `index` as a fragment, if it matched and is non-empty.
fn fragment<'t>(line: &Line<'t>, caps: &regex::Captures<'t>, index: usize) -> Option<Fragment<'t>> {
    caps.get(index)
        .filter(|m| !m.as_str().trim().is_empty())
        .map(|m| Fragment {
            text: m.as_str().trim_end(),
            start: line.start + m.start(),
        })
}

/// Number and title of a heading line.
///
/// Without a separator the title must not start with a lowercase letter, so
/// prose such as "Part 3 of this by-law ..." stays a plain line.
fn heading<'t>(pattern: &Regex, text: &'t str) -> Option<(&'t str, &'t str)> {
    let caps = pattern.captures(text)?;
    let num = caps.get(1)?.as_str();

    if let Some(title) = caps.get(2) {
        return Some((num, title.as_str().trim()));
    }

    let title = caps.get(3).map_or("", |m| m.as_str().trim());
    if title.starts_with(char::is_lowercase) {
        return None;
    }
    Some((num, title))
}

/// Classify a line by its leading marker.
pub(crate) fn classify<'t>(line: &Line<'t>) -> LineKind<'t> {
    let text = line.text;

    if let Some((num, title)) = heading(&CHAPTER_HEADING, text) {
        return LineKind::ChapterHeading { num, title };
    }

    if let Some((num, title)) = heading(&PART_HEADING, text) {
        return LineKind::PartHeading { num, title };
    }

    if let Some(caps) = SECTION_TITLE.captures(text) {
        let num = caps.get(1).map_or("", |m| m.as_str());
        return LineKind::SectionTitle {
            num,
            rest: fragment(line, &caps, 2),
        };
    }

    if let Some(caps) = NUMBERED_STATEMENT.captures(text) {
        let num = caps.get(1).map_or("", |m| m.as_str());
        return LineKind::Numbered {
            num,
            content: fragment(line, &caps, 2),
        };
    }

    if let Some(caps) = BLOCKLIST_ITEM.captures(text) {
        let marker = caps.get(1).map_or("", |m| m.as_str());
        return LineKind::Item {
            marker,
            content: fragment(line, &caps, 2),
        };
    }

    LineKind::Plain
}

/// Classify a fragment of a line as a statement (numbered or plain).
///
/// Used for the text that follows a section number on the same line.
pub(crate) fn classify_statement<'t>(fragment: Fragment<'t>) -> LineKind<'t> {
    let line = Line {
        text: fragment.text,
        start: fragment.start,
        indent: 0,
    };
    match NUMBERED_STATEMENT.captures(fragment.text) {
        Some(caps) => LineKind::Numbered {
            num: caps.get(1).map_or("", |m| m.as_str()),
            content: self::fragment(&line, &caps, 2),
        },
        None => LineKind::Plain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> Line<'_> {
        Line {
            text,
            start: 0,
            indent: 0,
        }
    }

    #[test]
    fn test_scan_lines_offsets() {
        let text = "first\n\n  second  \r\nthird";
        let lines = scan_lines(text, 0);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "first");
        assert_eq!(lines[1].text, "second");
        assert_eq!(lines[1].start, 9);
        assert_eq!(lines[1].indent, 2);
        assert_eq!(&text[lines[1].start..lines[1].end()], "second");
        assert_eq!(lines[2].start, 20);
    }

    #[test]
    fn test_scan_lines_from_offset() {
        let text = "skip\nkeep\n";
        let lines = scan_lines(text, 5);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "keep");
        assert_eq!(lines[0].start, 5);
    }

    #[test]
    fn test_classify_chapter_heading() {
        assert_eq!(
            classify(&line("CHAPTER 1 - General provisions")),
            LineKind::ChapterHeading {
                num: "1",
                title: "General provisions"
            }
        );
        assert_eq!(
            classify(&line("Chapter 2A")),
            LineKind::ChapterHeading {
                num: "2A",
                title: ""
            }
        );
    }

    #[test]
    fn test_classify_part_heading() {
        assert_eq!(
            classify(&line("PART 2: Fees")),
            LineKind::PartHeading {
                num: "2",
                title: "Fees"
            }
        );
    }

    #[test]
    fn test_classify_lettered_headings() {
        assert_eq!(
            classify(&line("PART A: General")),
            LineKind::PartHeading {
                num: "A",
                title: "General"
            }
        );
        assert_eq!(
            classify(&line("PART C: General")),
            LineKind::PartHeading {
                num: "C",
                title: "General"
            }
        );
        assert_eq!(
            classify(&line("Chapter IV Enforcement")),
            LineKind::ChapterHeading {
                num: "IV",
                title: "Enforcement"
            }
        );
    }

    #[test]
    fn test_classify_prose_mentioning_part() {
        assert_eq!(
            classify(&line("Part 3 of this by-law does not apply to farms.")),
            LineKind::Plain
        );
        assert_eq!(
            classify(&line("Chapter 2 applies to all erven.")),
            LineKind::Plain
        );
    }

    #[test]
    fn test_classify_section_title() {
        let kind = classify(&line("12A. Definitions"));
        let LineKind::SectionTitle { num, rest } = kind else {
            panic!("expected section title, got {kind:?}");
        };
        assert_eq!(num, "12A");
        assert_eq!(rest.map(|f| f.text), Some("Definitions"));
        assert_eq!(rest.map(|f| f.start), Some(5));

        assert_eq!(
            classify(&line("3.")),
            LineKind::SectionTitle { num: "3", rest: None }
        );
    }

    #[test]
    fn test_classify_numbered_statement() {
        let LineKind::Numbered { num, content } = classify(&line("(1) Text here")) else {
            panic!("expected numbered statement");
        };
        assert_eq!(num, "(1)");
        assert_eq!(content.map(|f| f.text), Some("Text here"));

        let LineKind::Numbered { num, content } = classify(&line("1.2 Dotted")) else {
            panic!("expected dotted numbered statement");
        };
        assert_eq!(num, "1.2");
        assert_eq!(content.map(|f| f.text), Some("Dotted"));

        assert_eq!(
            classify(&line("(2)")),
            LineKind::Numbered {
                num: "(2)",
                content: None
            }
        );
    }

    #[test]
    fn test_classify_item() {
        let LineKind::Item { marker, content } = classify(&line("(a) farm land;")) else {
            panic!("expected item");
        };
        assert_eq!(marker, "(a)");
        assert_eq!(content.map(|f| f.text), Some("farm land;"));
    }

    #[test]
    fn test_classify_plain() {
        assert_eq!(classify(&line("In this by-law")), LineKind::Plain);
        assert_eq!(classify(&line("1.Definitions")), LineKind::Plain);
        assert_eq!(classify(&line("Partial rebates")), LineKind::Plain);
        assert_eq!(classify(&line("Part of the land")), LineKind::Plain);
    }

    #[test]
    fn test_classify_statement_fragment() {
        let fragment = Fragment {
            text: "(1) In this by-law",
            start: 10,
        };
        let LineKind::Numbered { num, content } = classify_statement(fragment) else {
            panic!("expected numbered statement");
        };
        assert_eq!(num, "(1)");
        assert_eq!(content.map(|f| f.start), Some(14));
    }
}
