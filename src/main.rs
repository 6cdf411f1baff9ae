//! Taosnap main entry point
//!
//! Command-line interface for the Taosnap search-result snapshotter.

use clap::Parser;
use std::path::PathBuf;
use taosnap::config::load_config_with_hash;
use taosnap::crawl::run_crawl;
use tracing_subscriber::EnvFilter;

/// Taosnap: paginated search-result snapshotter
///
/// Taosnap drives a WebDriver-controlled browser through the result pages
/// of an e-commerce search, extracts the rendered product listings, and
/// stores them as documents.
#[derive(Parser, Debug)]
#[command(name = "taosnap")]
#[command(version = "0.1.0")]
#[command(about = "Snapshot paginated search results into a document store", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without launching a browser
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, _config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    tracing::info!(
        "Searching '{}' on {} into collection '{}'",
        config.search.query,
        config.search.site_url,
        config.store.collection
    );

    match run_crawl(config).await {
        Ok(()) => {
            tracing::info!("Snapshot completed successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Snapshot failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("taosnap=info,warn"),
            1 => EnvFilter::new("taosnap=debug,info"),
            2 => EnvFilter::new("taosnap=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the crawl plan
fn handle_dry_run(config: &taosnap::config::Config) {
    println!("=== Taosnap Dry Run ===\n");

    println!("Search:");
    println!("  Site: {}", config.search.site_url);
    println!("  Query: {}", config.search.query);

    println!("\nBrowser:");
    println!("  WebDriver endpoint: {}", config.browser.webdriver_url);
    println!("  Wait timeout: {}ms", config.browser.wait_timeout_ms);
    println!("  Poll interval: {}ms", config.browser.poll_interval_ms);
    println!(
        "  Retries: {} attempts, {}ms backoff",
        config.browser.max_attempts, config.browser.retry_backoff_ms
    );

    println!("\nStore:");
    println!("  Database: {}", config.store.database_path);
    println!("  Collection: {}", config.store.collection);

    println!("\nSelectors:");
    println!("  Query input: {}", config.selectors.query_input);
    println!("  Query submit: {}", config.selectors.query_submit);
    println!("  Total count: {}", config.selectors.total_count);
    println!("  Page input: {}", config.selectors.page_input);
    println!("  Page submit: {}", config.selectors.page_submit);
    println!("  Active page: {}", config.selectors.active_page);
    println!("  Item: {}", config.selectors.item);

    println!("\n✓ Configuration is valid");
}
