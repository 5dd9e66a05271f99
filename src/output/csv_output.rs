//! CSV output
//!
//! Rows are written to `<prefix>_<YYYY-MM-DD>.csv` with a fixed header. The
//! file is first written under a temporary name and renamed into place, so a
//! failed write never leaves a partial output file.

use crate::model::BookRecord;
use crate::output::OutputHandler;
use crate::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Output column order
pub const COLUMNS: [&str; 9] = [
    "scraping_date",
    "book_title",
    "category",
    "price",
    "rating",
    "instock",
    "availability",
    "UPC",
    "link",
];

/// Builds the output file name for a scrape date
///
/// ```
/// use book_scraper::output::output_file_name;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 7, 9).unwrap();
/// assert_eq!(output_file_name("book_scraper", date), "book_scraper_2024-07-09.csv");
/// ```
pub fn output_file_name(prefix: &str, scrape_date: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, scrape_date.format("%Y-%m-%d"))
}

/// Writes `records` to `path`, replacing any existing file
pub fn write_csv(records: &[BookRecord], path: &Path) -> Result<()> {
    let staging = path.with_extension("csv.tmp");

    if let Err(e) = write_rows(records, &staging) {
        let _ = fs::remove_file(&staging);
        return Err(e);
    }

    if let Err(e) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(e.into());
    }
    Ok(())
}

fn write_rows(records: &[BookRecord], path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes CSV files into a directory
#[derive(Debug, Clone)]
pub struct CsvOutputHandler {
    directory: PathBuf,
    file_prefix: String,
}

impl CsvOutputHandler {
    pub fn new(directory: impl Into<PathBuf>, file_prefix: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_prefix: file_prefix.into(),
        }
    }

    /// Full path of the file written for `scrape_date`
    pub fn path_for(&self, scrape_date: NaiveDate) -> PathBuf {
        self.directory
            .join(output_file_name(&self.file_prefix, scrape_date))
    }
}

impl OutputHandler for CsvOutputHandler {
    fn write_records(&self, records: &[BookRecord], scrape_date: NaiveDate) -> Result<PathBuf> {
        fs::create_dir_all(&self.directory)?;

        let path = self.path_for(scrape_date);
        write_csv(records, &path)?;

        tracing::info!("Wrote {} records to {}", records.len(), path.display());
        Ok(path)
    }
}
