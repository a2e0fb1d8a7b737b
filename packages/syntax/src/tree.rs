//! Syntax tree for by-law documents.
//!
//! Each node owns its children; no node refers back to its parent. The only
//! state that changes after construction is the definitions cache on
//! [`Section`], which is filled at most once per section instance.

use std::sync::OnceLock;

/// Kinds of [`Node`] that make up the document body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Chapter,
    Part,
    Section,
}

impl NodeKind {
    /// Lowercase name used in logs and error messages.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chapter => "chapter",
            Self::Part => "part",
            Self::Section => "section",
        }
    }
}

/// Byte range into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// An empty span at `offset`.
    #[must_use]
    pub fn empty(offset: usize) -> Self {
        Self::new(offset, offset)
    }
}

/// Whole by-law.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Introductory prose before the first heading or section.
    pub preamble: Option<Preamble>,

    /// Top-level containers in document order.
    pub body: Vec<Node>,
}

impl Document {
    /// Iterate over all sections in document order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        let mut stack: Vec<&Node> = self.body.iter().rev().collect();
        std::iter::from_fn(move || {
            while let Some(node) = stack.pop() {
                match node {
                    Node::Section(section) => return Some(section),
                    Node::Chapter(chapter) => stack.extend(chapter.children.iter().rev()),
                    Node::Part(part) => stack.extend(part.children.iter().rev()),
                }
            }
            None
        })
    }
}

/// Introductory prose.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Preamble {
    pub statements: Vec<NakedStatement>,
}

/// A node that can appear in the document body or inside a container.
///
/// The grammar nests chapters in parts or parts in chapters depending on
/// which kind of heading comes first; sections are always innermost.
#[derive(Debug, Clone)]
pub enum Node {
    Chapter(Chapter),
    Part(Part),
    Section(Section),
}

impl Node {
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Chapter(_) => NodeKind::Chapter,
            Self::Part(_) => NodeKind::Part,
            Self::Section(_) => NodeKind::Section,
        }
    }
}

/// Number and title of a chapter or part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub num: String,
    pub title: String,
}

impl Heading {
    #[must_use]
    pub fn new(num: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            num: num.into(),
            title: title.into(),
        }
    }
}

/// Top hierarchy level (or second level when parts come first).
#[derive(Debug, Clone, Default)]
pub struct Chapter {
    /// Absent when the document has no chapter heading at this point.
    pub heading: Option<Heading>,
    pub children: Vec<Node>,
}

impl Chapter {
    #[must_use]
    pub fn num(&self) -> Option<&str> {
        self.heading.as_ref().map(|h| h.num.as_str())
    }
}

/// Secondary hierarchy level (or top level when parts come first).
#[derive(Debug, Clone, Default)]
pub struct Part {
    /// Absent when the document has no part heading at this point.
    pub heading: Option<Heading>,
    pub children: Vec<Node>,
}

impl Part {
    #[must_use]
    pub fn num(&self) -> Option<&str> {
        self.heading.as_ref().map(|h| h.num.as_str())
    }
}

/// An addressable provision.
#[derive(Debug, Clone)]
pub struct Section {
    pub num: String,
    pub title: String,

    /// Source range of everything after the title.
    pub content_span: Span,

    pub subsections: Vec<Subsection>,

    definitions: OnceLock<Option<DefinitionsSection>>,
}

impl Section {
    #[must_use]
    pub fn new(
        num: impl Into<String>,
        title: impl Into<String>,
        content_span: Span,
        subsections: Vec<Subsection>,
    ) -> Self {
        Self {
            num: num.into(),
            title: title.into(),
            content_span,
            subsections,
            definitions: OnceLock::new(),
        }
    }

    /// Return the cached definitions verdict, computing it with `init` on
    /// first access.
    ///
    /// `init` runs at most once per section; later calls return the stored
    /// verdict, including a stored `None`.
    pub fn definitions_or_init<F>(&self, init: F) -> Option<&DefinitionsSection>
    where
        F: FnOnce() -> Option<DefinitionsSection>,
    {
        self.definitions.get_or_init(init).as_ref()
    }

    /// The cached verdict, or `None` if it has not been computed yet.
    #[must_use]
    pub fn cached_definitions(&self) -> Option<Option<&DefinitionsSection>> {
        self.definitions.get().map(Option::as_ref)
    }
}

/// A content unit of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subsection {
    pub statement: Statement,
    pub blocklist: Option<Blocklist>,
}

/// The statement a subsection is built around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Numbered(NumberedStatement),
    Naked(NakedStatement),
}

impl Statement {
    /// The number token, for numbered statements only.
    #[must_use]
    pub fn num(&self) -> Option<&str> {
        match self {
            Self::Numbered(s) => Some(&s.num),
            Self::Naked(_) => None,
        }
    }

    /// Text after the number, if any.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Numbered(s) => s.content.as_deref(),
            Self::Naked(s) => Some(&s.content),
        }
    }
}

/// A "(1) text" style statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedStatement {
    /// Number token as written, e.g. `(1)` or `1.2`.
    pub num: String,
    pub content: Option<String>,
    pub span: Span,
}

/// An unlabelled statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NakedStatement {
    pub content: String,
    pub span: Span,
}

/// A nested lettered list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Blocklist {
    pub items: Vec<BlocklistItem>,
}

/// One entry of a [`Blocklist`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlocklistItem {
    /// List marker as written, e.g. `(a)`.
    pub num: String,
    pub content: String,
    pub blocklist: Option<Blocklist>,
    pub span: Span,
}

/// A section body recognised as a list of term definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionsSection {
    pub intro: String,
    pub definitions: Vec<Definition>,
}

/// One `"term" means ...` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// The defined term, without quotes.
    pub term: String,

    /// Text after the closing quote, leading whitespace included.
    pub content: String,

    pub statements: Vec<DefinitionStatement>,
    pub span: Span,
}

/// Text or list nested under a definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionStatement {
    pub content: Option<String>,
    pub blocklist: Option<Blocklist>,
}
