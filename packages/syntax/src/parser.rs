//! Primary by-law grammar.
//!
//! The grammar is line oriented. Each non-blank line is classified by its
//! leading marker, then a recursive descent assembles the hierarchy:
//!
//! ```text
//! document   := preamble? outer+
//! outer      := heading? inner+
//! inner      := heading? section+
//! section    := section-title subsection*
//! subsection := statement blocklist?
//! ```
//!
//! `outer` is whichever of chapter and part appears first in the document;
//! the other kind is `inner`.

use tracing::debug;

use crate::cursor::Cursor;
use crate::definitions;
use crate::error::{ParseError, Result};
use crate::grammar::DefinitionsGrammar;
use crate::lines::{classify_statement, Fragment, LineKind};
use crate::tree::{
    Chapter, DefinitionsSection, Document, Heading, NakedStatement, Node, NumberedStatement, Part,
    Preamble, Section, Span, Statement, Subsection,
};

/// Options that select between document conventions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Section titles are written on their own line, above the numbered
    /// first line of the section:
    ///
    /// ```text
    /// Definitions
    /// 1. In this by-law...
    /// ```
    pub section_number_after_title: bool,
}

/// Container level a heading line introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Chapter,
    Part,
}

impl Level {
    fn other(self) -> Self {
        match self {
            Self::Chapter => Self::Part,
            Self::Part => Self::Chapter,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Chapter => "chapter",
            Self::Part => "part",
        }
    }

    fn heading<'t>(self, kind: LineKind<'t>) -> Option<(&'t str, &'t str)> {
        match (self, kind) {
            (Self::Chapter, LineKind::ChapterHeading { num, title })
            | (Self::Part, LineKind::PartHeading { num, title }) => Some((num, title)),
            _ => None,
        }
    }

    fn container(self, heading: Option<Heading>, children: Vec<Node>) -> Node {
        match self {
            Self::Chapter => Node::Chapter(Chapter { heading, children }),
            Self::Part => Node::Part(Part { heading, children }),
        }
    }
}

/// The by-law parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BylawParser {
    options: ParserOptions,
}

impl BylawParser {
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Parse a whole by-law.
    ///
    /// # Arguments
    ///
    /// * `text` - The by-law as plain text
    ///
    /// # Returns
    ///
    /// The syntax tree, or a `ParseError` pointing at the first line the
    /// grammar could not place.
    ///
    /// The first heading fixes the nesting order for the whole document: a
    /// document that opens with a chapter nests parts inside chapters, and
    /// one that opens with a part nests chapters inside parts. A heading of
    /// the inner kind followed directly by one of the outer kind is a
    /// heading without sections and fails at the second heading.
    pub fn parse(&self, text: &str) -> Result<Document> {
        let mut cursor = Cursor::new(text, 0);

        let preamble = self.preamble(&mut cursor);

        if cursor.is_done() {
            return Err(ParseError::at(text, text.len(), "section"));
        }

        let outer = match cursor.next_heading() {
            Some(LineKind::PartHeading { .. }) => Level::Part,
            _ => Level::Chapter,
        };

        let mut body = Vec::new();
        while !cursor.is_done() {
            body.push(self.container(text, &mut cursor, outer)?);
        }

        let document = Document { preamble, body };
        debug!(
            outer = outer.name(),
            containers = document.body.len(),
            sections = document.sections().count(),
            "Parsed by-law"
        );
        Ok(document)
    }

    fn preamble(&self, cursor: &mut Cursor<'_>) -> Option<Preamble> {
        let mut statements = Vec::new();
        while let Some((line, _)) = cursor.peek() {
            if self.is_structural(cursor) {
                break;
            }
            statements.push(NakedStatement {
                content: line.text.to_string(),
                span: line.span(),
            });
            cursor.advance();
        }

        (!statements.is_empty()).then_some(Preamble { statements })
    }

    /// Parse an outer container with its inner containers.
    fn container(&self, text: &str, cursor: &mut Cursor<'_>, level: Level) -> Result<Node> {
        let heading_start = cursor.peek().map_or(text.len(), |(line, _)| line.start);
        let heading = self.heading(cursor, level);

        let mut children = Vec::new();
        while let Some((_, kind)) = cursor.peek() {
            if level.heading(kind).is_some() {
                break;
            }
            children.push(self.inner_container(text, cursor, level.other())?);
        }

        if children.is_empty() {
            return Err(ParseError::at(text, heading_start, "section"));
        }

        Ok(level.container(heading, children))
    }

    /// Parse an inner container with its sections.
    fn inner_container(&self, text: &str, cursor: &mut Cursor<'_>, level: Level) -> Result<Node> {
        let heading = self.heading(cursor, level);

        let mut sections = Vec::new();
        while self.starts_section(cursor) {
            sections.push(Node::Section(self.section(text, cursor)?));
        }

        if sections.is_empty() {
            let offset = cursor.peek().map_or(text.len(), |(line, _)| line.start);
            return Err(ParseError::at(text, offset, "section"));
        }

        Ok(level.container(heading, sections))
    }

    /// Consume a heading line of `level`, if the cursor is on one.
    ///
    /// A heading without a title on its own line takes the next line as
    /// its title when that line is plain text.
    fn heading(&self, cursor: &mut Cursor<'_>, level: Level) -> Option<Heading> {
        let (num, title) = cursor.peek().and_then(|(_, kind)| level.heading(kind))?;
        cursor.advance();

        let mut title = title.to_string();
        if title.is_empty() {
            if let Some((line, LineKind::Plain)) = cursor.peek() {
                if !self.starts_section(cursor) {
                    title = line.text.to_string();
                    cursor.advance();
                }
            }
        }

        Some(Heading::new(num, title))
    }

    fn is_structural(&self, cursor: &Cursor<'_>) -> bool {
        match cursor.peek() {
            Some((_, LineKind::ChapterHeading { .. } | LineKind::PartHeading { .. })) => true,
            Some(_) => self.starts_section(cursor),
            None => false,
        }
    }

    fn starts_section(&self, cursor: &Cursor<'_>) -> bool {
        match cursor.peek() {
            Some((_, LineKind::SectionTitle { .. })) => true,
            Some((_, LineKind::Plain)) if self.options.section_number_after_title => {
                matches!(cursor.peek_at(1), Some((_, LineKind::SectionTitle { .. })))
            }
            _ => false,
        }
    }

    /// Parse a section; the cursor is on its first line.
    fn section(&self, text: &str, cursor: &mut Cursor<'_>) -> Result<Section> {
        let mut title = String::new();
        if let Some((line, LineKind::Plain)) = cursor.peek() {
            title = line.text.to_string();
            cursor.advance();
        }

        let Some((number_line, LineKind::SectionTitle { num, rest })) = cursor.peek() else {
            let offset = cursor.peek().map_or(text.len(), |(line, _)| line.start);
            return Err(ParseError::at(text, offset, "section number"));
        };
        cursor.advance();

        // With titles above the number, the rest of the number line is content.
        let mut leading = None;
        if self.options.section_number_after_title {
            leading = rest;
        } else if let Some(rest) = rest {
            title = rest.text.to_string();
        }

        let mut subsections = Vec::new();
        let mut content_start = leading.map(|fragment| fragment.start);

        if let Some(fragment) = leading {
            let statement = statement_from_fragment(fragment);
            subsections.push(Self::subsection(cursor, statement));
        }

        while let Some((line, kind)) = cursor.peek() {
            if self.is_structural(cursor) {
                break;
            }
            content_start.get_or_insert(line.start);

            let statement = match kind {
                LineKind::Numbered { num, content } => Statement::Numbered(NumberedStatement {
                    num: num.to_string(),
                    content: content.map(|f| f.text.to_string()),
                    span: line.span(),
                }),
                LineKind::Item { .. } => {
                    return Err(ParseError::at(text, line.start, "statement before list item"));
                }
                _ => Statement::Naked(NakedStatement {
                    content: line.text.to_string(),
                    span: line.span(),
                }),
            };
            cursor.advance();
            subsections.push(Self::subsection(cursor, statement));
        }

        let content_span = match (content_start, cursor.last_end()) {
            (Some(start), Some(end)) => Span::new(start, end),
            _ => Span::empty(number_line.end()),
        };

        Ok(Section::new(num, title, content_span, subsections))
    }

    /// Attach a following list, if any, to `statement`.
    fn subsection(cursor: &mut Cursor<'_>, statement: Statement) -> Subsection {
        let blocklist = match cursor.peek() {
            Some((_, LineKind::Item { .. })) => Some(cursor.blocklist()),
            _ => None,
        };
        Subsection {
            statement,
            blocklist,
        }
    }
}

impl DefinitionsGrammar for BylawParser {
    /// Parse `text[start..]` as a definitions section.
    ///
    /// See [`crate::definitions::parse_definitions`].
    fn parse_definitions(&self, text: &str, start: usize) -> Result<DefinitionsSection> {
        definitions::parse_definitions(text, start)
    }
}

/// Build a statement from text that follows a section number.
fn statement_from_fragment(fragment: Fragment<'_>) -> Statement {
    match classify_statement(fragment) {
        LineKind::Numbered { num, content } => Statement::Numbered(NumberedStatement {
            num: num.to_string(),
            content: content.map(|f| f.text.to_string()),
            span: fragment.span(),
        }),
        _ => Statement::Naked(NakedStatement {
            content: fragment.text.to_string(),
            span: fragment.span(),
        }),
    }
}
