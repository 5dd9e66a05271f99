//! Book-Scraper: a page-by-page catalogue crawler
//!
//! This crate walks a paginated book catalogue (categories, listing pages,
//! detail pages), extracts one record per listed book, removes exact
//! duplicates and writes the result as a CSV file.

pub mod config;
pub mod crawler;
pub mod model;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Book-Scraper operations
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error for {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Expected element '{selector}' not found on {url}")]
    StructuralMismatch { url: String, selector: String },

    #[error("Element on {url} is missing attribute '{attribute}'")]
    MissingAttribute { url: String, attribute: String },

    #[error("Detail page {url} has no '{field}' row")]
    MissingField { url: String, field: String },

    #[error("Value for '{field}' does not match expected pattern: {value:?}")]
    ParseMismatch { field: String, value: String },

    #[error("Unrecognized rating word: {0:?}")]
    UnrecognizedRating(String),

    #[error("Pagination revisited {url}")]
    PaginationLoop { url: String },

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Book-Scraper operations
pub type Result<T> = std::result::Result<T, ScraperError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{run_crawl, CrawlOutcome, Crawler, Fetcher, HttpFetcher};
pub use model::{BookRecord, Category, Rating, ResultSet};
