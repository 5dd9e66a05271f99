//! Crawl coordinator - main crawl orchestration logic
//!
//! This module ties the traversal together:
//! - Fetching the root page and discovering categories
//! - Walking each category's listing pages in document order
//! - Deduplicating the collected records
//! - Handing the final rows to the output handler
//!
//! Nothing is written until the whole traversal has succeeded; any error
//! aborts the run without an output file.

use crate::config::{Config, SiteConfig};
use crate::crawler::categories::discover_categories;
use crate::crawler::context::CrawlContext;
use crate::crawler::pagination::walk_category;
use crate::crawler::parser::Page;
use crate::crawler::{Fetcher, HttpFetcher};
use crate::model::{BookRecord, Category};
use crate::output::{deduplicate, CrawlStatistics, CsvOutputHandler, OutputHandler};
use crate::Result;
use std::path::PathBuf;
use std::time::Instant;
use url::Url;

/// Drives a crawl over one catalogue
pub struct Crawler<F: Fetcher> {
    site: SiteConfig,
    fetcher: F,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(site: SiteConfig, fetcher: F) -> Self {
        Self { site, fetcher }
    }

    #[cfg(test)]
    fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetches the root page and returns its categories
    pub async fn discover(&self) -> Result<Vec<Category>> {
        let root = Url::parse(&self.site.root_url)?;
        let body = self.fetcher.fetch(&root).await?;
        let page = Page::parse(root, &body);
        discover_categories(&page, &self.site)
    }

    /// Walks every category, appending records to `ctx.results`
    pub async fn crawl(&self, ctx: &mut CrawlContext) -> Result<()> {
        let categories = self.discover().await?;
        ctx.stats.categories = categories.len();
        tracing::info!("Discovered {} categories", categories.len());

        for (index, category) in categories.iter().enumerate() {
            tracing::info!(
                "[{}/{}] Crawling category '{}'",
                index + 1,
                categories.len(),
                category.name
            );

            let walk = walk_category(&self.fetcher, &self.site, ctx, category).await?;
            ctx.stats
                .records_by_category
                .push((category.name.clone(), walk.records));

            tracing::info!(
                "Category '{}': {} records from {} pages",
                category.name,
                walk.records,
                walk.pages
            );
        }

        Ok(())
    }

    /// Crawls, deduplicates and writes through `output`
    pub async fn run<O: OutputHandler>(
        &self,
        mut ctx: CrawlContext,
        output: &O,
    ) -> Result<CrawlOutcome> {
        let start_time = Instant::now();

        self.crawl(&mut ctx).await?;

        let scrape_date = ctx.scrape_date;
        let mut stats = ctx.stats;
        stats.raw_records = ctx.results.len();

        let records = deduplicate(ctx.results.into_records());
        stats.unique_records = records.len();

        tracing::info!(
            "Crawl finished in {:?}: {} records, {} duplicates removed",
            start_time.elapsed(),
            stats.raw_records,
            stats.duplicates_removed()
        );

        let output_path = output.write_records(&records, scrape_date)?;

        Ok(CrawlOutcome {
            output_path,
            records,
            stats,
        })
    }
}

/// Result of a completed crawl
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    /// File the records were written to
    pub output_path: PathBuf,

    /// Deduplicated records, in crawl order
    pub records: Vec<BookRecord>,

    pub stats: CrawlStatistics,
}

impl CrawlOutcome {
    pub fn total(&self) -> usize {
        self.records.len()
    }
}

/// Runs the main crawl operation
///
/// 1. Build the HTTP fetcher
/// 2. Capture the scrape date
/// 3. Discover categories and walk every listing page
/// 4. Deduplicate
/// 5. Write `<prefix>_<date>.csv` into the output directory
///
/// # Example
///
/// ```no_run
/// use book_scraper::config::Config;
/// use book_scraper::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let outcome = run_crawl(Config::default()).await?;
/// println!("There are in total {} books.", outcome.total());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config) -> Result<CrawlOutcome> {
    let fetcher = HttpFetcher::new(&config.user_agent, &config.fetcher)?;
    let crawler = Crawler::new(config.site, fetcher);
    let output = CsvOutputHandler::new(&config.output.directory, &config.output.file_prefix);

    crawler.run(CrawlContext::today(), &output).await
}
