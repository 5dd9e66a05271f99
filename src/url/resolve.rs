//! Link resolution rules for the catalogue
//!
//! The catalogue's hrefs are resolved with plain string rules rather than
//! RFC 3986 joining: category hrefs are relative to the site root, detail
//! hrefs carry a fixed `../` prefix, and next-page hrefs are relative to the
//! current page's directory.

use crate::Result;
use url::Url;

/// Resolves a category href from the navigation list
///
/// # Example
///
/// ```
/// use book_scraper::url::category_url;
///
/// let url = category_url(
///     "https://books.toscrape.com/",
///     "catalogue/category/books/travel_2/index.html",
/// ).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://books.toscrape.com/catalogue/category/books/travel_2/index.html"
/// );
/// ```
pub fn category_url(base: &str, href: &str) -> Result<Url> {
    Ok(Url::parse(&format!("{}{}", base, href.trim()))?)
}

/// Resolves a detail-page href from a listing page
///
/// Every occurrence of `prefix` is removed before `base` is prepended.
pub fn detail_url(base: &str, prefix: &str, href: &str) -> Result<Url> {
    let href = href.trim();
    let stripped = if prefix.is_empty() {
        href.to_string()
    } else {
        href.replace(prefix, "")
    };
    Ok(Url::parse(&format!("{}{}", base, stripped))?)
}

/// Resolves a next-page href against the current page's directory
///
/// The current URL is cut after its last `/` and the href appended.
pub fn next_page_url(current: &Url, href: &str) -> Result<Url> {
    let current = current.as_str();
    let directory = match current.rfind('/') {
        Some(idx) => &current[..=idx],
        None => current,
    };
    Ok(Url::parse(&format!("{}{}", directory.trim(), href.trim()))?)
}
