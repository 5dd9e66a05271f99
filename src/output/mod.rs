//! Output module for finalizing crawl results
//!
//! This module handles:
//! - Removing exact-duplicate records
//! - Writing the CSV file
//! - Recording crawl statistics

mod csv_output;
mod dedup;
pub mod stats;
mod traits;

pub use csv_output::{output_file_name, write_csv, CsvOutputHandler, COLUMNS};
pub use dedup::deduplicate;
pub use stats::{print_statistics, CrawlStatistics};
pub use traits::OutputHandler;
