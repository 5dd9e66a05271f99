//! Detail page extraction
//!
//! A detail page carries a product table with one header/value pair per row.
//! The `Availability` row is free text ("In stock (19 available)"); the stored
//! value is its first run of digits.

use crate::crawler::parser::{text_of, Page};
use crate::model::DetailInfo;
use crate::{Result, ScraperError};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const AVAILABILITY_KEY: &str = "Availability";
pub const PRODUCT_CODE_KEY: &str = "UPC";

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Extracts the attribute table from a detail page
pub fn extract_detail(page: &Page) -> Result<DetailInfo> {
    let table = page.find_first(page.root(), "table.table.table-striped")?;

    let mut attributes = BTreeMap::new();
    for row in page.find_all(table, "tr")? {
        let key = text_of(page.find_first(row, "th")?);
        let value = text_of(page.find_first(row, "td")?);
        attributes.insert(key, value);
    }

    let raw_availability = required(page, &attributes, AVAILABILITY_KEY)?;
    let digits = first_number(raw_availability)?.to_string();
    let availability = digits
        .parse::<u32>()
        .map_err(|_| ScraperError::ParseMismatch {
            field: AVAILABILITY_KEY.to_string(),
            value: raw_availability.to_string(),
        })?;
    attributes.insert(AVAILABILITY_KEY.to_string(), digits);

    let product_code = required(page, &attributes, PRODUCT_CODE_KEY)?.to_string();

    Ok(DetailInfo {
        attributes,
        availability,
        product_code,
    })
}

/// Returns the first run of ASCII digits in `text`
pub fn first_number(text: &str) -> Result<&str> {
    DIGITS
        .find(text)
        .map(|m| m.as_str())
        .ok_or_else(|| ScraperError::ParseMismatch {
            field: AVAILABILITY_KEY.to_string(),
            value: text.to_string(),
        })
}

fn required<'a>(page: &Page, attributes: &'a BTreeMap<String, String>, key: &str) -> Result<&'a str> {
    attributes
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| ScraperError::MissingField {
            url: page.url().to_string(),
            field: key.to_string(),
        })
}
