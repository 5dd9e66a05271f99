//! Catalogue page builders and an in-memory fetcher for traversal tests

use crate::config::SiteConfig;
use crate::crawler::Fetcher;
use crate::{Result, ScraperError};
use std::collections::HashMap;
use std::sync::Mutex;
use url::Url;

/// Site configuration rooted at `base` (which must end with `/`)
pub fn site_config(base: &str) -> SiteConfig {
    SiteConfig {
        root_url: format!("{}index.html", base),
        category_base_url: base.to_string(),
        detail_base_url: format!("{}catalogue/", base),
        detail_href_prefix: "../../../".to_string(),
    }
}

/// Root page with the category navigation; entries are `(name, href)`
pub fn root_html(categories: &[(&str, &str)]) -> String {
    let mut entries = String::new();
    for (name, href) in categories {
        entries.push_str(&format!(
            "<li>\n<a href=\"{}\">\n    {}\n</a>\n</li>\n",
            href, name
        ));
    }
    format!(
        r#"<html><body><div class="side_categories">
        <ul class="nav nav-list">
            <li><a href="catalogue/category/books_1/index.html">Books</a>
                <ul>{}</ul>
            </li>
        </ul></div></body></html>"#,
        entries
    )
}

/// Listing page; items are `(title, rating word, detail href)`
pub fn listing_html(items: &[(&str, &str, &str)], next_href: Option<&str>) -> String {
    let mut body = String::from(r#"<html><body><section><ol class="row">"#);
    for (title, rating, href) in items {
        body.push_str(&format!(
            r#"<li class="col-xs-6 col-sm-4 col-md-3 col-lg-3">
            <article class="product_pod">
                <p class="star-rating {rating}"><i class="icon-star"></i></p>
                <h3><a href="{href}" title="{title}">{title}</a></h3>
                <div class="product_price">
                    <p class="price_color">£10.00</p>
                    <p class="instock availability"><i class="icon-ok"></i>
                        In stock
                    </p>
                </div>
            </article></li>"#
        ));
    }
    body.push_str("</ol>");
    body.push_str(r#"<div><ul class="pager"><li class="current">Page</li>"#);
    if let Some(href) = next_href {
        body.push_str(&format!(r#"<li class="next"><a href="{}">next</a></li>"#, href));
    }
    body.push_str("</ul></div></section></body></html>");
    body
}

/// Detail page with the product table
pub fn detail_html(upc: &str, availability: &str) -> String {
    format!(
        r#"<html><body><article class="product_page">
        <table class="table table-striped">
            <tr><th>UPC</th><td>{}</td></tr>
            <tr><th>Product Type</th><td>Books</td></tr>
            <tr><th>Availability</th><td>{}</td></tr>
        </table></article></body></html>"#,
        upc, availability
    )
}

/// Serves canned bodies keyed by absolute URL and records every request
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, body: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), body.into());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Fetcher for MemoryFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| ScraperError::HttpStatus {
                url: url.to_string(),
                status: 404,
            })
    }
}
