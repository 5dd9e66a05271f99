//! Category discovery from the catalogue's root page

use crate::config::SiteConfig;
use crate::crawler::parser::{text_of, Page};
use crate::model::Category;
use crate::url::category_url;
use crate::Result;

/// Enumerates the categories listed in the root page's side navigation
///
/// The navigation is `ul.nav.nav-list > li > ul > li > a`; the outer `li` is
/// the catalogue-wide "Books" entry and is not itself a category. Categories
/// are returned in document order.
pub fn discover_categories(page: &Page, site: &SiteConfig) -> Result<Vec<Category>> {
    let nav = page.find_first(page.root(), "ul.nav.nav-list")?;
    let top = page.find_first(nav, "li")?;
    let list = page.find_first(top, "ul")?;

    let mut categories = Vec::new();
    for entry in page.find_all(list, "li")? {
        let anchor = page.find_first(entry, "a")?;
        let href = page.attr(anchor, "href")?;
        categories.push(Category {
            name: text_of(anchor),
            first_page_url: category_url(&site.category_base_url, href)?,
        });
    }

    Ok(categories)
}
