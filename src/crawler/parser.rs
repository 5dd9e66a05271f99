//! HTML query helpers over parsed catalogue pages
//!
//! Lookups that the extractors depend on fail with
//! [`ScraperError::StructuralMismatch`] naming the page and the selector, so a
//! layout change surfaces as a precise error instead of an empty result.

use crate::{Result, ScraperError};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// A fetched page together with its parsed document
pub struct Page {
    url: Url,
    document: Html,
}

impl Page {
    /// Parses a response body fetched from `url`
    pub fn parse(url: Url, body: &str) -> Self {
        Self {
            url,
            document: Html::parse_document(body),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The document's root element, the starting scope for queries
    pub fn root(&self) -> ElementRef<'_> {
        self.document.root_element()
    }

    /// Returns the first descendant of `scope` matching `selector`
    pub fn find_first<'a>(&self, scope: ElementRef<'a>, selector: &str) -> Result<ElementRef<'a>> {
        self.find_optional(scope, selector)?
            .ok_or_else(|| ScraperError::StructuralMismatch {
                url: self.url.to_string(),
                selector: selector.to_string(),
            })
    }

    /// Returns the first match, or `None` when nothing matches
    ///
    /// Absence is a normal outcome here; only an invalid selector is an error.
    pub fn find_optional<'a>(
        &self,
        scope: ElementRef<'a>,
        selector: &str,
    ) -> Result<Option<ElementRef<'a>>> {
        let compiled = compile(selector)?;
        let found = scope.select(&compiled).next();
        Ok(found)
    }

    /// Returns every descendant of `scope` matching `selector`, in document order
    pub fn find_all<'a>(&self, scope: ElementRef<'a>, selector: &str) -> Result<Vec<ElementRef<'a>>> {
        let compiled = compile(selector)?;
        Ok(scope.select(&compiled).collect())
    }

    /// Returns a required attribute value
    pub fn attr<'a>(&self, element: ElementRef<'a>, name: &str) -> Result<&'a str> {
        element
            .value()
            .attr(name)
            .ok_or_else(|| ScraperError::MissingAttribute {
                url: self.url.to_string(),
                attribute: name.to_string(),
            })
    }
}

/// Collects an element's text content, trimmed of surrounding whitespace
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScraperError::Selector(format!("{}: {:?}", selector, e)))
}
