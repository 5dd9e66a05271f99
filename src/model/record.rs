use crate::model::Rating;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

/// A catalogue category discovered from the root navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub first_page_url: Url,
}

/// Summary of one book as shown on a listing page
///
/// Never persisted on its own; merged with [`DetailInfo`] into a [`BookRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingItem {
    pub title: String,
    /// Displayed price, kept as text (e.g. `£51.77`)
    pub price: String,
    pub in_stock: String,
    pub rating: Rating,
    pub detail_url: Url,
}

/// Attributes scraped from a detail page's product table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailInfo {
    /// Every table row, header text to cell text. `Availability` holds the
    /// extracted count rather than the raw sentence.
    pub attributes: BTreeMap<String, String>,
    pub availability: u32,
    pub product_code: String,
}

impl DetailInfo {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// One output row
///
/// Field order and serialized names match the CSV header consumers expect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BookRecord {
    #[serde(rename = "scraping_date")]
    pub scrape_date: NaiveDate,
    #[serde(rename = "book_title")]
    pub title: String,
    #[serde(rename = "category")]
    pub category_name: String,
    pub price: String,
    pub rating: u8,
    #[serde(rename = "instock")]
    pub in_stock: String,
    pub availability: u32,
    #[serde(rename = "UPC")]
    pub product_code: String,
    #[serde(rename = "link")]
    pub detail_url: String,
}

impl BookRecord {
    /// Builds a record from a listing summary and its detail page data
    pub fn merge(
        scrape_date: NaiveDate,
        category_name: &str,
        item: ListingItem,
        detail: &DetailInfo,
    ) -> Self {
        Self {
            scrape_date,
            title: item.title,
            category_name: category_name.to_string(),
            price: item.price,
            rating: item.rating.value(),
            in_stock: item.in_stock,
            availability: detail.availability,
            product_code: detail.product_code.clone(),
            detail_url: item.detail_url.into(),
        }
    }
}

/// Append-only collection of every record produced during a crawl
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    records: Vec<BookRecord>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: BookRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BookRecord> {
        self.records.iter()
    }

    /// Consumes the set, returning records in append order
    pub fn into_records(self) -> Vec<BookRecord> {
        self.records
    }
}
