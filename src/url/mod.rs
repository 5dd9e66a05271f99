//! URL handling module for Book-Scraper
//!
//! Every href read from the catalogue is turned into an absolute URL here
//! before anything is fetched.

mod resolve;

pub use resolve::{category_url, detail_url, next_page_url};
