//! Book-Scraper main entry point
//!
//! This is the command-line interface for the Book-Scraper catalogue crawler.

use anyhow::Context;
use book_scraper::config::{load_config_with_hash, validate, Config};
use book_scraper::crawler::run_crawl;
use book_scraper::output::{output_file_name, print_statistics};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Book-Scraper: a page-by-page catalogue crawler
///
/// Walks every category of the catalogue, collects one record per listed
/// book (enriched from its detail page), drops exact duplicates and writes
/// `book_scraper_<date>.csv`. With no arguments it crawls
/// https://books.toscrape.com/ into the current directory.
#[derive(Parser, Debug)]
#[command(name = "book-scraper")]
#[command(version)]
#[command(about = "A page-by-page catalogue crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Directory for the CSV output (overrides the config file)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the resolved configuration without crawling
    #[arg(long)]
    dry_run: bool,

    /// Print crawl statistics after the run
    #[arg(long)]
    stats: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(dir) = cli.output_dir {
        config.output.directory = dir.to_string_lossy().into_owned();
        validate(&config)?;
    }

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    tracing::info!("Starting crawl at {}", config.site.root_url);
    let outcome = match run_crawl(config).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    println!("There are in total {} books.", outcome.total());

    if cli.stats {
        println!();
        print_statistics(&outcome.stats);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("book_scraper=info,warn"),
            1 => EnvFilter::new("book_scraper=debug,info"),
            2 => EnvFilter::new("book_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr; stdout carries only the record count
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(config: &Config) {
    println!("=== Book-Scraper Dry Run ===\n");

    println!("Site:");
    println!("  Root URL: {}", config.site.root_url);
    println!("  Category base: {}", config.site.category_base_url);
    println!("  Detail base: {}", config.site.detail_base_url);
    println!("  Detail href prefix: {:?}", config.site.detail_href_prefix);

    println!("\nFetcher:");
    println!(
        "  User agent: {}/{}",
        config.user_agent.name, config.user_agent.version
    );
    println!("  Timeout: {}s", config.fetcher.timeout_secs);
    println!("  Connect timeout: {}s", config.fetcher.connect_timeout_secs);
    println!(
        "  Fail on HTTP error status: {}",
        config.fetcher.fail_on_http_error
    );

    let today = chrono::Local::now().date_naive();
    println!("\nOutput:");
    println!(
        "  File: {}",
        PathBuf::from(&config.output.directory)
            .join(output_file_name(&config.output.file_prefix, today))
            .display()
    );

    println!("\n✓ Configuration is valid");
}
