//! Configuration module for Book-Scraper
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! A missing file is not an error for the binary: `Config::default()` targets the
//! public demo catalogue.
//!
//! # Example
//!
//! ```no_run
//! use book_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("book-scraper.toml")).unwrap();
//! println!("Crawl starts at: {}", config.site.root_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetcherConfig, OutputConfig, SiteConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
