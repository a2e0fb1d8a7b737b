//! By-law markup - Convert plain-text by-laws to Akoma Ntoso XML.
//!
//! This crate projects the syntax tree produced by `bylaw-syntax` onto
//! Akoma Ntoso 2.0 structural markup: hierarchical identifiers, definitions
//! rendered as defined terms, lists and a front-matter metadata block.
//!
//! # Example
//!
//! ```
//! use bylaw_markup::{convert_bylaw, ConvertOptions};
//!
//! let text = "1. Definitions\n\"council\" means the municipal council;\n";
//! let xml = convert_bylaw(text, &ConvertOptions::default()).unwrap();
//!
//! assert!(xml.contains(r#"<point id="def-term-council">"#));
//! assert!(xml.contains(r##"<def refersTo="#term-council">council</def>"##));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants and validation
//! - [`error`]: Error types and Result alias
//! - [`ids`]: Hierarchical identifier composition
//! - [`context`]: Ancestor context threaded through the walk
//! - [`dispatch`]: Definitions-or-subsections rendering decision
//! - [`transform`]: Syntax tree to XML transformation
//! - [`metadata`]: Front-matter identity block
//! - [`xml`]: XML value tree, serializer and navigation helpers
//! - [`toc`]: Table of contents over produced XML
//! - [`convert`]: Conversion service
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod context;
pub mod convert;
pub mod dispatch;
pub mod error;
pub mod ids;
pub mod metadata;
pub mod toc;
pub mod transform;
pub mod xml;

// Re-export main functions
pub use convert::{convert_bylaw, ConvertOptions};

// Re-export commonly used items
pub use config::validate_date;
pub use context::{Ancestor, AncestorContext, ContainerKind};
pub use error::{MarkupError, Result};
pub use metadata::{emit_meta, Metadata};
pub use toc::{build_toc, TocEntry};
pub use transform::Transformer;
