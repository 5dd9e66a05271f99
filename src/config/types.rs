use serde::Deserialize;

/// Main configuration structure for Book-Scraper
///
/// Every section is optional in the TOML file; missing sections fall back to
/// the defaults, which target `books.toscrape.com`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Catalogue layout: where the crawl starts and how relative links resolve
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SiteConfig {
    /// Root document holding the category navigation
    pub root_url: String,

    /// Prefix prepended to category hrefs from the navigation list
    pub category_base_url: String,

    /// Prefix prepended to detail hrefs once the relative prefix is stripped
    pub detail_base_url: String,

    /// Relative path prefix carried by detail hrefs on listing pages
    pub detail_href_prefix: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root_url: "https://books.toscrape.com/index.html".to_string(),
            category_base_url: "https://books.toscrape.com/".to_string(),
            detail_base_url: "https://books.toscrape.com/catalogue/".to_string(),
            detail_href_prefix: "../../../".to_string(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    pub name: String,

    /// Version of the crawler
    pub version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: "book-scraper".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// HTTP fetch behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FetcherConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds
    pub connect_timeout_secs: u64,

    /// Treat non-success HTTP status codes as fatal fetch errors
    pub fail_on_http_error: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
            fail_on_http_error: false,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct OutputConfig {
    /// Directory receiving the CSV file
    pub directory: String,

    /// File name prefix; the scrape date and `.csv` are appended
    pub file_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            file_prefix: "book_scraper".to_string(),
        }
    }
}
