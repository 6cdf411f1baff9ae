//! Search submission and first-page priming
//!
//! Opens the site root, submits the fixed query term, extracts the first
//! result page, and returns the raw total-result-count text for the
//! orchestrator to parse.

use crate::browser::{Browser, BrowserResult};
use crate::config::Config;
use crate::crawl::page::extract_current_page;
use crate::crawl::retry::RetryPolicy;
use crate::crawl::CrawlError;
use crate::extract::ListingSelectors;
use crate::storage::DocumentSink;

/// Submits the search and returns the raw total-count text
///
/// Every step uses a bounded wait; a timeout at any step restarts the whole
/// operation from the site root, up to the policy's attempt cap. Exhaustion
/// surfaces as `CrawlError::RetriesExhausted`.
pub async fn search<B, S>(
    browser: &B,
    sink: &mut S,
    config: &Config,
    listing: &ListingSelectors,
    policy: &RetryPolicy,
) -> Result<String, CrawlError>
where
    B: Browser + Sync + ?Sized,
    S: DocumentSink + Send + ?Sized,
{
    let mut attempt = 0;
    loop {
        attempt += 1;
        match try_search(browser, sink, config, listing).await {
            Ok(total_text) => return Ok(total_text),
            Err(e) if policy.should_retry(attempt, &e) => {
                tracing::warn!(
                    "Search attempt {}/{} timed out: {}; retrying",
                    attempt,
                    policy.max_attempts,
                    e
                );
                tokio::time::sleep(policy.backoff).await;
            }
            Err(e) if e.is_timeout() => {
                return Err(CrawlError::RetriesExhausted {
                    operation: "search".to_string(),
                    attempts: attempt,
                    source: e,
                });
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// One search attempt: open, type, submit, extract page 1, read total
async fn try_search<B, S>(
    browser: &B,
    sink: &mut S,
    config: &Config,
    listing: &ListingSelectors,
) -> BrowserResult<String>
where
    B: Browser + Sync + ?Sized,
    S: DocumentSink + Send + ?Sized,
{
    let selectors = &config.selectors;

    browser.open(&config.search.site_url).await?;
    browser.wait_present(&selectors.query_input).await?;
    browser.wait_clickable(&selectors.query_submit).await?;
    browser.fill(&selectors.query_input, &config.search.query).await?;
    browser.click(&selectors.query_submit).await?;
    browser.wait_present(&selectors.total_count).await?;

    extract_current_page(browser, sink, &selectors.item, listing).await?;

    browser.read_text(&selectors.total_count).await
}
