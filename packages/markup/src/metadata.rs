//! Front-matter identity and publication block.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::Result;
use crate::xml::XmlElement;

/// Identity fields of the converted by-law.
///
/// Every field has a placeholder default, so a YAML file only needs the
/// fields it wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub country: String,
    pub locality: String,
    pub year: String,
    pub name: String,
    pub title: String,
    pub language: String,

    /// Date of the work and expression, YYYY-MM-DD.
    pub date: String,

    pub publication_name: String,
    pub publication_number: String,
    pub council_name: String,
    pub council_href: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            country: "za".to_string(),
            locality: "locale".to_string(),
            year: "1980".to_string(),
            name: "name".to_string(),
            title: "By-Law Short Title".to_string(),
            language: "eng".to_string(),
            date: "1980-01-01".to_string(),
            publication_name: "Province of Western Cape: Provincial Gazette".to_string(),
            publication_number: "XXXX".to_string(),
            council_name: "Cape Town City Council".to_string(),
            council_href: "/ontology/organization/za/council.cape-town".to_string(),
        }
    }
}

impl Metadata {
    /// Parse metadata from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Load metadata from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Work URI, e.g. `/za/by-law/locale/1980/name`.
    #[must_use]
    pub fn work_uri(&self) -> String {
        format!(
            "/{}/by-law/{}/{}/{}",
            self.country, self.locality, self.year, self.name
        )
    }

    #[must_use]
    pub fn expression_uri(&self) -> String {
        format!("{}/{}@", self.work_uri(), self.language)
    }
}

fn value(name: &str, value: impl Into<String>) -> XmlElement {
    XmlElement::new(name).with_attr("value", value)
}

fn generation_date(date: impl Into<String>) -> XmlElement {
    XmlElement::new("FRBRdate")
        .with_attr("date", date)
        .with_attr("name", "Generation")
}

fn author(href: &str) -> XmlElement {
    XmlElement::new("FRBRauthor")
        .with_attr("href", href)
        .with_attr("as", "#author")
}

/// Build the `meta` element.
///
/// # Arguments
/// * `metadata` - Identity fields
/// * `generated` - Date of this conversion, used for the manifestation
pub fn emit_meta(metadata: &Metadata, generated: NaiveDate) -> XmlElement {
    let work_uri = metadata.work_uri();
    let expression_uri = metadata.expression_uri();
    let expression_this = format!("{work_uri}/main/{}@", metadata.language);

    let work = XmlElement::new("FRBRWork")
        .with_child(value("FRBRthis", format!("{work_uri}/main")))
        .with_child(value("FRBRuri", work_uri.as_str()))
        .with_child(value("FRBRalias", metadata.title.as_str()))
        .with_child(generation_date(metadata.date.as_str()))
        .with_child(author("#council"))
        .with_child(value("FRBRcountry", metadata.country.as_str()));

    let expression = XmlElement::new("FRBRExpression")
        .with_child(value("FRBRthis", expression_this.as_str()))
        .with_child(value("FRBRuri", expression_uri.as_str()))
        .with_child(generation_date(metadata.date.as_str()))
        .with_child(author("#council"))
        .with_child(
            XmlElement::new("FRBRlanguage").with_attr("language", metadata.language.as_str()),
        );

    let manifestation = XmlElement::new("FRBRManifestation")
        .with_child(value("FRBRthis", expression_this.as_str()))
        .with_child(value("FRBRuri", expression_uri.as_str()))
        .with_child(generation_date(generated.format("%Y-%m-%d").to_string()))
        .with_child(author("#openbylaws"));

    let identification = XmlElement::new("identification")
        .with_attr("source", "#openbylaws")
        .with_child(work)
        .with_child(expression)
        .with_child(manifestation);

    let publication = XmlElement::new("publication")
        .with_attr("date", metadata.date.as_str())
        .with_attr("name", metadata.publication_name.as_str())
        .with_attr("number", metadata.publication_number.as_str())
        .with_attr("showAs", metadata.publication_name.as_str());

    let references = XmlElement::new("references")
        .with_attr("source", "#this")
        .with_child(
            XmlElement::new("TLCOrganization")
                .with_attr("id", "openbylaws")
                .with_attr("href", "http://openbylaws.org.za")
                .with_attr("showAs", "openbylaws.org.za"),
        )
        .with_child(
            XmlElement::new("TLCOrganization")
                .with_attr("id", "council")
                .with_attr("href", metadata.council_href.as_str())
                .with_attr("showAs", metadata.council_name.as_str()),
        )
        .with_child(
            XmlElement::new("TLCRole")
                .with_attr("id", "author")
                .with_attr("href", "/ontology/role/author")
                .with_attr("showAs", "Author"),
        );

    XmlElement::new("meta")
        .with_child(identification)
        .with_child(publication)
        .with_child(references)
}
