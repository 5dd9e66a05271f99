//! Crawler module for catalogue traversal and extraction
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the [`Fetcher`] trait
//! - HTML query helpers
//! - Category discovery, pagination, listing and detail extraction
//! - Overall crawl coordination

mod categories;
mod context;
mod coordinator;
mod detail;
mod fetcher;
mod listing;
mod pagination;
pub mod parser;

#[cfg(test)]
mod fixtures;

pub use categories::discover_categories;
pub use context::CrawlContext;
pub use coordinator::{run_crawl, CrawlOutcome, Crawler};
pub use detail::{extract_detail, first_number, AVAILABILITY_KEY, PRODUCT_CODE_KEY};
pub use fetcher::{build_http_client, Fetcher, HttpFetcher};
pub use listing::{collect_records, parse_listing_items, rating_from_classes};
pub use pagination::{next_page, walk_category, CategoryWalk};
pub use parser::Page;
