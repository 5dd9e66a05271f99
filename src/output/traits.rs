//! Output handler trait
//!
//! Persistence runs once, after traversal and deduplication have finished.

use crate::model::BookRecord;
use crate::Result;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Trait for output backends
pub trait OutputHandler {
    /// Writes the finalized records and returns the location written to
    fn write_records(&self, records: &[BookRecord], scrape_date: NaiveDate) -> Result<PathBuf>;
}
