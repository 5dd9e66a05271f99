use crate::model::ResultSet;
use crate::output::CrawlStatistics;
use chrono::NaiveDate;

/// Mutable state threaded through one crawl
///
/// The scrape date is fixed when the context is created and stamped on every
/// record, so a run that crosses midnight still produces a single date.
#[derive(Debug, Clone)]
pub struct CrawlContext {
    pub scrape_date: NaiveDate,
    pub results: ResultSet,
    pub stats: CrawlStatistics,
}

impl CrawlContext {
    pub fn new(scrape_date: NaiveDate) -> Self {
        Self {
            scrape_date,
            results: ResultSet::new(),
            stats: CrawlStatistics::default(),
        }
    }

    /// Context dated with the local calendar day
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }
}
