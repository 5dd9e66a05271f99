//! Pagination walker for one category
//!
//! A category is a linear chain of listing pages. The walker fetches the
//! current page, hands it to the listing extractor, then follows the page's
//! "next" link until a page without one is reached.
//!
//! # States
//!
//! | State | Condition | Action |
//! |-------|-----------|--------|
//! | has-next-page | `li.next a` present | resolve href, fetch it |
//! | terminal | no `li.next` | stop, normal completion |
//!
//! Fetch and extraction failures are not "no next page": they propagate.

use crate::config::SiteConfig;
use crate::crawler::context::CrawlContext;
use crate::crawler::listing::{collect_records, parse_listing_items};
use crate::crawler::parser::Page;
use crate::crawler::Fetcher;
use crate::model::Category;
use crate::url::next_page_url;
use crate::{Result, ScraperError};
use std::collections::HashSet;
use url::Url;

/// Totals for one walked category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryWalk {
    pub pages: usize,
    pub records: usize,
}

/// Walks every listing page of `category`, appending records to `ctx`
pub async fn walk_category<F: Fetcher>(
    fetcher: &F,
    site: &SiteConfig,
    ctx: &mut CrawlContext,
    category: &Category,
) -> Result<CategoryWalk> {
    let mut walk = CategoryWalk::default();
    let mut visited: HashSet<Url> = HashSet::new();
    let mut current = category.first_page_url.clone();

    loop {
        if !visited.insert(current.clone()) {
            return Err(ScraperError::PaginationLoop {
                url: current.to_string(),
            });
        }

        tracing::debug!("{}: page {} at {}", category.name, walk.pages + 1, current);
        let body = fetcher.fetch(&current).await?;

        let (items, next) = {
            let page = Page::parse(current.clone(), &body);
            (parse_listing_items(&page, site)?, next_page(&page)?)
        };
        walk.pages += 1;
        ctx.stats.listing_pages += 1;

        walk.records += collect_records(fetcher, ctx, &category.name, items).await?;

        match next {
            Some(url) => current = url,
            None => break,
        }
    }

    Ok(walk)
}

/// Looks up the page's next-page link
///
/// `Ok(None)` is the terminal condition. A `li.next` marker without an
/// anchor is a layout change and fails.
pub fn next_page(page: &Page) -> Result<Option<Url>> {
    let Some(marker) = page.find_optional(page.root(), "li.next")? else {
        return Ok(None);
    };

    let anchor = page.find_first(marker, "a")?;
    let href = page.attr(anchor, "href")?;
    Ok(Some(next_page_url(page.url(), href)?))
}
