//! Listing page extraction
//!
//! A listing page shows a batch of product summaries inside `ol.row`. Each
//! summary is parsed first; afterwards every item's detail page is fetched in
//! document order and the merged record appended to the crawl's result set.

use crate::config::SiteConfig;
use crate::crawler::context::CrawlContext;
use crate::crawler::detail::extract_detail;
use crate::crawler::parser::{text_of, Page};
use crate::crawler::Fetcher;
use crate::model::{BookRecord, ListingItem, Rating};
use crate::url::detail_url;
use crate::{Result, ScraperError};
use scraper::ElementRef;

/// Parses every product summary on a listing page
pub fn parse_listing_items(page: &Page, site: &SiteConfig) -> Result<Vec<ListingItem>> {
    let container = page.find_first(page.root(), "ol.row")?;

    page.find_all(container, "li")?
        .into_iter()
        .map(|item| parse_item(page, item, site))
        .collect()
}

fn parse_item(page: &Page, item: ElementRef<'_>, site: &SiteConfig) -> Result<ListingItem> {
    let anchor = page.find_first(item, "h3 a")?;
    let title = page.attr(anchor, "title")?.trim().to_string();
    let href = page.attr(anchor, "href")?;

    let price = text_of(page.find_first(item, "p.price_color")?);
    let in_stock = text_of(page.find_first(item, "p.instock.availability")?);

    let marker = page.find_first(item, "p.star-rating")?;
    let rating = rating_from_classes(page.attr(marker, "class")?)?;

    Ok(ListingItem {
        title,
        price,
        in_stock,
        rating,
        detail_url: detail_url(&site.detail_base_url, &site.detail_href_prefix, href)?,
    })
}

/// Reads the rating word from a `star-rating <Word>` class list
///
/// The first token is the decorative marker class and is skipped.
pub fn rating_from_classes(classes: &str) -> Result<Rating> {
    let word = classes
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| ScraperError::ParseMismatch {
            field: "rating".to_string(),
            value: classes.to_string(),
        })?;
    word.parse()
}

/// Fetches each item's detail page and appends the merged records
///
/// Returns the number of records appended.
pub async fn collect_records<F: Fetcher>(
    fetcher: &F,
    ctx: &mut CrawlContext,
    category_name: &str,
    items: Vec<ListingItem>,
) -> Result<usize> {
    let count = items.len();

    for item in items {
        let body = fetcher.fetch(&item.detail_url).await?;
        let detail = {
            let page = Page::parse(item.detail_url.clone(), &body);
            extract_detail(&page)?
        };
        ctx.stats.detail_pages += 1;

        tracing::trace!("{} [{}]", item.title, detail.product_code);
        ctx.results
            .push(BookRecord::merge(ctx.scrape_date, category_name, item, &detail));
    }

    Ok(count)
}
