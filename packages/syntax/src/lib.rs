//! By-law syntax tree and grammar parser.
//!
//! This crate turns plain by-law text into a typed syntax tree: chapters,
//! parts, sections, subsections, numbered lists and definitions. The tree is
//! consumed by `bylaw-markup`, which projects it onto structural XML.
//!
//! # Example
//!
//! ```
//! use bylaw_syntax::{BylawParser, Node};
//!
//! let text = "1. Application\n(1) This by-law applies.\n";
//! let document = BylawParser::default().parse(text).unwrap();
//!
//! // No headings: the chapter and part levels are present but heading-less.
//! let Node::Chapter(chapter) = &document.body[0] else { panic!("expected chapter") };
//! assert!(chapter.heading.is_none());
//! ```
//!
//! # Architecture
//!
//! - [`tree`]: Node types for the by-law hierarchy
//! - [`error`]: Position-annotated parse errors
//! - [`parser`]: Primary by-law grammar and parser options
//! - [`definitions`]: Definitions sub-grammar
//! - [`grammar`]: The sub-grammar seam used by the markup engine

mod cursor;
pub mod definitions;
pub mod error;
pub mod grammar;
mod lines;
pub mod parser;
pub mod tree;

pub use error::{ParseError, Result};
pub use grammar::DefinitionsGrammar;
pub use parser::{BylawParser, ParserOptions};
pub use tree::{
    Blocklist, BlocklistItem, Chapter, Definition, DefinitionStatement, DefinitionsSection,
    Document, Heading, NakedStatement, Node, NodeKind, NumberedStatement, Part, Preamble,
    Section, Span, Statement, Subsection,
};
