//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with the configured user agent and timeouts
//! - GET requests returning the page body
//! - Error classification at the transport boundary
//!
//! By default the status code is not interpreted: any body that arrives is
//! handed to the extractors, and a bad page surfaces as a structural mismatch.
//! `fail-on-http-error` turns non-success statuses into fatal errors instead.

use crate::config::{FetcherConfig, UserAgentConfig};
use crate::{Result, ScraperError};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use url::Url;

/// Source of page bodies for the crawl
///
/// The crawler awaits each call before issuing the next, so implementations
/// never see concurrent requests.
pub trait Fetcher {
    /// Fetches `url` and returns the response body as text
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<String>> + Send;
}

/// Fetcher backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    fail_on_http_error: bool,
}

impl HttpFetcher {
    /// Builds a fetcher from configuration
    pub fn new(user_agent: &UserAgentConfig, config: &FetcherConfig) -> Result<Self> {
        let client = build_http_client(user_agent, config)?;

        Ok(Self {
            client,
            fail_on_http_error: config.fail_on_http_error,
        })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ScraperError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            if self.fail_on_http_error {
                return Err(ScraperError::HttpStatus {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }
            tracing::warn!("{} returned HTTP {}, parsing body anyway", url, status);
        }

        response.text().await.map_err(|source| ScraperError::Network {
            url: url.to_string(),
            source,
        })
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use book_scraper::config::{FetcherConfig, UserAgentConfig};
/// use book_scraper::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), &FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    config: &FetcherConfig,
) -> std::result::Result<Client, reqwest::Error> {
    // Format: Name/Version
    let user_agent = format!("{}/{}", user_agent.name, user_agent.version);

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}
