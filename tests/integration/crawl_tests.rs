//! Integration tests for the crawler
//!
//! These tests use wiremock to serve a small catalogue and run the full
//! crawl cycle end-to-end, including the CSV output.

use book_scraper::config::{Config, FetcherConfig, OutputConfig, SiteConfig, UserAgentConfig};
use book_scraper::crawler::run_crawl;
use book_scraper::output::output_file_name;
use book_scraper::ScraperError;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration for a catalogue served at `base_url`
fn create_test_config(base_url: &str, output_dir: &TempDir, strict: bool) -> Config {
    Config {
        site: SiteConfig {
            root_url: format!("{}/index.html", base_url),
            category_base_url: format!("{}/", base_url),
            detail_base_url: format!("{}/catalogue/", base_url),
            detail_href_prefix: "../../../".to_string(),
        },
        user_agent: UserAgentConfig {
            name: "TestScraper".to_string(),
            version: "1.0.0".to_string(),
        },
        fetcher: FetcherConfig {
            timeout_secs: 5,
            connect_timeout_secs: 2,
            fail_on_http_error: strict,
        },
        output: OutputConfig {
            directory: output_dir.path().to_string_lossy().into_owned(),
            file_prefix: "book_scraper".to_string(),
        },
    }
}

fn root_page(categories: &[(&str, &str)]) -> String {
    let entries: String = categories
        .iter()
        .map(|(name, slug)| {
            format!(
                r#"<li><a href="catalogue/category/books/{}/index.html">
                    {}
                </a></li>"#,
                slug, name
            )
        })
        .collect();
    format!(
        r#"<html><body><ul class="nav nav-list"><li>
        <a href="catalogue/category/books_1/index.html">Books</a>
        <ul>{}</ul></li></ul></body></html>"#,
        entries
    )
}

fn listing_page(items: &[(&str, &str)], next: Option<&str>) -> String {
    let products: String = items
        .iter()
        .map(|(title, id)| {
            format!(
                r#"<li><article class="product_pod">
                <p class="star-rating Two"></p>
                <h3><a href="../../../{id}/index.html" title="{title}">{title}</a></h3>
                <p class="price_color">£20.00</p>
                <p class="instock availability">In stock</p>
                </article></li>"#
            )
        })
        .collect();
    let pager = match next {
        Some(href) => format!(r#"<ul class="pager"><li class="next"><a href="{}">next</a></li></ul>"#, href),
        None => r#"<ul class="pager"><li class="previous"><a href="index.html">previous</a></li></ul>"#.to_string(),
    };
    format!(
        r#"<html><body><ol class="row">{}</ol>{}</body></html>"#,
        products, pager
    )
}

fn detail_page(upc: &str) -> String {
    format!(
        r#"<html><body><table class="table table-striped">
        <tr><th>UPC</th><td>{}</td></tr>
        <tr><th>Availability</th><td>In stock (19 available)</td></tr>
        </table></body></html>"#,
        upc
    )
}

async fn mount_html(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Two categories, two listing pages each, two items per page
async fn mount_catalogue(server: &MockServer, repeat_last_item: bool) {
    mount_html(
        server,
        "/index.html",
        root_page(&[("Travel", "travel_2"), ("Mystery", "mystery_3")]),
    )
    .await;

    for (slug, prefix) in [("travel_2", "t"), ("mystery_3", "m")] {
        let ids: Vec<String> = (1..=4).map(|n| format!("{}{}", prefix, n)).collect();
        let last = if repeat_last_item && prefix == "m" {
            ids[2].clone()
        } else {
            ids[3].clone()
        };

        mount_html(
            server,
            &format!("/catalogue/category/books/{}/index.html", slug),
            listing_page(
                &[(ids[0].as_str(), ids[0].as_str()), (ids[1].as_str(), ids[1].as_str())],
                Some("page-2.html"),
            ),
        )
        .await;
        mount_html(
            server,
            &format!("/catalogue/category/books/{}/page-2.html", slug),
            listing_page(
                &[(ids[2].as_str(), ids[2].as_str()), (last.as_str(), last.as_str())],
                None,
            ),
        )
        .await;

        for id in &ids {
            mount_html(
                server,
                &format!("/catalogue/{}/index.html", id),
                detail_page(&format!("upc-{}", id)),
            )
            .await;
        }
    }
}

#[tokio::test]
async fn test_full_crawl_writes_every_record() {
    let mock_server = MockServer::start().await;
    mount_catalogue(&mock_server, false).await;

    let output_dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), &output_dir, false);

    let outcome = run_crawl(config).await.expect("Crawl failed");

    assert_eq!(outcome.total(), 8);
    assert_eq!(outcome.stats.raw_records, 8);
    assert_eq!(outcome.stats.listing_pages, 4);

    let scrape_date = outcome.records[0].scrape_date;
    assert_eq!(
        outcome.output_path,
        output_dir
            .path()
            .join(output_file_name("book_scraper", scrape_date))
    );

    let content = std::fs::read_to_string(&outcome.output_path).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(
        lines[0],
        "scraping_date,book_title,category,price,rating,instock,availability,UPC,link"
    );
    assert_eq!(
        lines[1],
        format!(
            "{},t1,Travel,£20.00,2,In stock,19,upc-t1,{}/catalogue/t1/index.html",
            scrape_date.format("%Y-%m-%d"),
            mock_server.uri()
        )
    );
    assert!(lines[8].contains(",Mystery,"));
}

#[tokio::test]
async fn test_full_crawl_removes_duplicate_rows() {
    let mock_server = MockServer::start().await;
    mount_catalogue(&mock_server, true).await;

    let output_dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), &output_dir, false);

    let outcome = run_crawl(config).await.expect("Crawl failed");

    assert_eq!(outcome.stats.raw_records, 8);
    assert_eq!(outcome.total(), 7);

    let content = std::fs::read_to_string(&outcome.output_path).unwrap();
    assert_eq!(content.lines().count(), 8);
}

#[tokio::test]
async fn test_missing_detail_page_aborts_without_output() {
    let mock_server = MockServer::start().await;
    mount_html(
        &mock_server,
        "/index.html",
        root_page(&[("Travel", "travel_2")]),
    )
    .await;
    mount_html(
        &mock_server,
        "/catalogue/category/books/travel_2/index.html",
        listing_page(&[("Lost", "lost_1")], None),
    )
    .await;
    // No detail page mounted: wiremock answers 404 with an empty body

    let output_dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), &output_dir, false);

    let result = run_crawl(config).await;

    assert!(matches!(
        result,
        Err(ScraperError::StructuralMismatch { .. })
    ));
    let written = std::fs::read_dir(output_dir.path()).unwrap().count();
    assert_eq!(written, 0, "no output file expected after a failed crawl");
}

#[tokio::test]
async fn test_strict_mode_fails_on_error_status() {
    let mock_server = MockServer::start().await;
    mount_html(
        &mock_server,
        "/index.html",
        root_page(&[("Travel", "travel_2")]),
    )
    .await;

    let output_dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), &output_dir, true);

    let result = run_crawl(config).await;

    assert!(matches!(
        result,
        Err(ScraperError::HttpStatus { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_unreachable_site_is_network_error() {
    let output_dir = TempDir::new().unwrap();
    let config = create_test_config("http://127.0.0.1:9", &output_dir, false);

    let result = run_crawl(config).await;

    assert!(matches!(result, Err(ScraperError::Network { .. })));
}
