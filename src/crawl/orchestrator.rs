//! Crawl orchestration
//!
//! Ties the pipeline together: run the search, parse the total page count
//! out of its result text, walk pages 2..N in order, and release the
//! browser whether the walk succeeded or not.

use crate::browser::{Browser, WebDriverBrowser};
use crate::config::Config;
use crate::crawl::navigator::search;
use crate::crawl::paginator::{PageDriver, Paginator};
use crate::crawl::retry::RetryPolicy;
use crate::crawl::CrawlError;
use crate::extract::ListingSelectors;
use crate::storage::{DocumentSink, SqliteSink};
use regex::Regex;
use std::path::Path;

/// Parses the total page count out of the raw total-count text
///
/// Takes the first contiguous digit run, so "共 100 条" and "100" both
/// parse to 100. Text without digits is a fatal error: there is no sane
/// page count to fall back to.
pub fn parse_total_pages(text: &str) -> Result<u32, CrawlError> {
    let digits = Regex::new(r"(\d+)").expect("digit pattern is valid");

    let total = digits
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .ok_or_else(|| CrawlError::TotalCount {
            text: text.to_string(),
        })?;

    Ok(total)
}

/// Visits pages 2..=total in strictly increasing order
///
/// Each page is fully processed (extraction and persistence included)
/// before the next one starts. Page 1 has already been handled by the
/// search step.
pub async fn visit_pages<D>(driver: &mut D, total: u32) -> Result<(), CrawlError>
where
    D: PageDriver + Send + ?Sized,
{
    for page in 2..=total {
        tracing::info!("Visiting page {}/{}", page, total);
        driver.goto_page(page).await?;
    }
    Ok(())
}

/// Runs a complete snapshot crawl
///
/// 1. Compile the configured selectors
/// 2. Open the document store
/// 3. Connect the browser session
/// 4. Search and extract page 1
/// 5. Parse the total page count
/// 6. Walk the remaining pages in order
/// 7. Release the browser, on success and on failure alike
pub async fn run_crawl(config: Config) -> crate::Result<()> {
    let listing = ListingSelectors::compile(&config.selectors)?;

    let mut sink = SqliteSink::new(
        Path::new(&config.store.database_path),
        &config.store.collection,
    )?;

    let browser = WebDriverBrowser::connect(&config.browser).await?;

    let result = crawl_pages(&browser, &mut sink, &config, &listing).await;

    // Release the session even when the crawl failed, so a dead crawl does
    // not leave a browser process behind.
    if let Err(e) = browser.close().await {
        tracing::warn!("Failed to close browser session: {}", e);
    }

    result?;

    let stored = sink.count()?;
    tracing::info!(
        "Snapshot complete: {} documents in collection '{}'",
        stored,
        config.store.collection
    );

    Ok(())
}

async fn crawl_pages<B, S>(
    browser: &B,
    sink: &mut S,
    config: &Config,
    listing: &ListingSelectors,
) -> Result<(), CrawlError>
where
    B: Browser + Sync,
    S: DocumentSink + Send,
{
    let policy = RetryPolicy::from_config(&config.browser);

    let total_text = search(browser, sink, config, listing, &policy).await?;
    let total = parse_total_pages(&total_text)?;
    tracing::info!("Search reported {} result pages ('{}')", total, total_text);

    let mut paginator = Paginator::new(browser, sink, &config.selectors, listing, policy);
    visit_pages(&mut paginator, total).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[test]
    fn test_parse_total_with_surrounding_text() {
        assert_eq!(parse_total_pages("共 100 条").unwrap(), 100);
    }

    #[test]
    fn test_parse_bare_number() {
        assert_eq!(parse_total_pages("100").unwrap(), 100);
    }

    #[test]
    fn test_parse_takes_first_digit_run() {
        assert_eq!(parse_total_pages("共 42 页 / 1000 条").unwrap(), 42);
    }

    #[test]
    fn test_parse_no_digits_is_fatal() {
        assert!(matches!(
            parse_total_pages("共 好多 条"),
            Err(CrawlError::TotalCount { .. })
        ));
        assert!(matches!(
            parse_total_pages(""),
            Err(CrawlError::TotalCount { .. })
        ));
    }

    /// Driver that records every requested page number
    struct RecordingDriver {
        pages: Vec<u32>,
    }

    #[async_trait]
    impl PageDriver for RecordingDriver {
        async fn goto_page(&mut self, page: u32) -> Result<(), CrawlError> {
            self.pages.push(page);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_visits_pages_two_through_total_in_order() {
        let mut driver = RecordingDriver { pages: Vec::new() };
        visit_pages(&mut driver, 6).await.unwrap();
        assert_eq!(driver.pages, vec![2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn test_single_page_total_visits_nothing() {
        let mut driver = RecordingDriver { pages: Vec::new() };
        visit_pages(&mut driver, 1).await.unwrap();
        assert!(driver.pages.is_empty());
    }

    #[tokio::test]
    async fn test_driver_error_stops_the_walk() {
        struct FailingDriver {
            pages: Vec<u32>,
        }

        #[async_trait]
        impl PageDriver for FailingDriver {
            async fn goto_page(&mut self, page: u32) -> Result<(), CrawlError> {
                self.pages.push(page);
                if page == 4 {
                    return Err(CrawlError::TotalCount {
                        text: "injected".to_string(),
                    });
                }
                Ok(())
            }
        }

        let mut driver = FailingDriver { pages: Vec::new() };
        assert!(visit_pages(&mut driver, 10).await.is_err());
        assert_eq!(driver.pages, vec![2, 3, 4]);
    }
}
