//! Syntax tree to XML transformation.
//!
//! The walk is a pure function of the syntax tree, the source text, the
//! metadata and the generation date. Identifiers come from [`crate::ids`];
//! position travels down in an [`crate::context::AncestorContext`].
//!
//! - `engine`: Document, container and section rules
//! - `content`: Subsections, lists and list items
//! - `definitions`: Definitions sections as lists of points

mod content;
mod definitions;
mod engine;

pub use engine::Transformer;
