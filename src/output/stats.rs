//! Crawl statistics
//!
//! Counters are updated as the traversal runs and completed once the result
//! set has been deduplicated.

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Number of categories discovered on the root page
    pub categories: usize,

    /// Listing pages fetched across all categories
    pub listing_pages: usize,

    /// Detail pages fetched
    pub detail_pages: usize,

    /// Records appended before deduplication
    pub raw_records: usize,

    /// Records remaining after deduplication
    pub unique_records: usize,

    /// Raw record count per category, in crawl order
    pub records_by_category: Vec<(String, usize)>,
}

impl CrawlStatistics {
    /// Number of exact-duplicate rows dropped
    pub fn duplicates_removed(&self) -> usize {
        self.raw_records.saturating_sub(self.unique_records)
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Overview:");
    println!("  Categories: {}", stats.categories);
    println!("  Listing pages fetched: {}", stats.listing_pages);
    println!("  Detail pages fetched: {}", stats.detail_pages);
    println!("  Records collected: {}", stats.raw_records);
    println!("  Duplicates removed: {}", stats.duplicates_removed());
    println!("  Unique records: {}", stats.unique_records);
    println!();

    if !stats.records_by_category.is_empty() {
        println!("Records by Category:");
        for (name, count) in &stats.records_by_category {
            println!("  {}: {}", name, count);
        }
        println!();
    }
}
