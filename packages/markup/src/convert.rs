//! Conversion service that ties parser, transformer and serializer together.

use chrono::NaiveDate;
use tracing::info;

use bylaw_syntax::{BylawParser, ParserOptions};

use crate::error::Result;
use crate::metadata::Metadata;
use crate::transform::Transformer;
use crate::xml::to_xml_string;

/// Options for one conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Section title convention of the input.
    pub parser: ParserOptions,

    pub metadata: Metadata,

    /// Manifestation date; today's local date when `None`.
    pub generation_date: Option<NaiveDate>,
}

/// Convert by-law text to an Akoma Ntoso document.
///
/// # Arguments
/// * `text` - Plain by-law text
/// * `options` - Parser convention, metadata and generation date
///
/// # Returns
/// The serialized XML document, or the first error. A grammar failure is
/// returned as `MarkupError::Parse` with its line and column.
///
/// # Examples
/// ```
/// use bylaw_markup::{convert_bylaw, ConvertOptions};
///
/// let xml = convert_bylaw("1. Application\n(1) This by-law applies.\n", &ConvertOptions::default()).unwrap();
/// assert!(xml.contains(r#"<subsection id="section-1.1">"#));
/// ```
pub fn convert_bylaw(text: &str, options: &ConvertOptions) -> Result<String> {
    let generated = options
        .generation_date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    info!(
        bytes = text.len(),
        section_number_after_title = options.parser.section_number_after_title,
        "Converting by-law"
    );

    let parser = BylawParser::new(options.parser);
    let document = parser.parse(text)?;

    let transformer = Transformer::new(text, &parser, &options.metadata, generated);
    let root = transformer.transform(&document)?;
    let xml = to_xml_string(&root)?;

    info!(
        sections = document.sections().count(),
        bytes = xml.len(),
        "Converted by-law"
    );

    Ok(xml)
}
