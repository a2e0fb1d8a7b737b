//! Configuration constants and validation functions.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{MarkupError, Result};

/// Akoma Ntoso 2.0 namespace for the root element.
pub const AKN_NAMESPACE: &str = "http://www.akomantoso.org/2.0";

/// Indentation width of serialized XML.
pub const XML_INDENT: usize = 2;

/// Value of `act/@contains` for freshly converted by-laws.
pub const ACT_CONTAINS: &str = "originalVersion";

/// Date pattern: YYYY-MM-DD.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Validate a date in YYYY-MM-DD format and return it parsed.
///
/// # Arguments
/// * `date_str` - Date string to validate
///
/// # Returns
/// * `Ok(NaiveDate)` if the format is right and the date exists
/// * `Err(MarkupError::InvalidDate)` otherwise
///
/// # Examples
/// ```
/// use bylaw_markup::config::validate_date;
///
/// assert!(validate_date("2025-01-01").is_ok());
/// assert!(validate_date("invalid").is_err());
/// assert!(validate_date("2025-13-01").is_err()); // Invalid month
/// ```
pub fn validate_date(date_str: &str) -> Result<NaiveDate> {
    if !DATE_PATTERN.is_match(date_str) {
        return Err(MarkupError::InvalidDate(date_str.to_string()));
    }

    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| MarkupError::InvalidDate(date_str.to_string()))
}
