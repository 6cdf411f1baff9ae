//! Page-jump driving
//!
//! Types a target page number into the pager form, submits, waits until the
//! active-page indicator reflects the target, then extracts the page.

use crate::browser::{Browser, BrowserResult};
use crate::config::SelectorConfig;
use crate::crawl::page::extract_current_page;
use crate::crawl::retry::RetryPolicy;
use crate::crawl::CrawlError;
use crate::extract::ListingSelectors;
use crate::storage::DocumentSink;
use async_trait::async_trait;

/// A driver that can bring the browser to a given result page
///
/// The orchestrator sequences pages through this trait, which keeps the
/// page-ordering logic testable without a browser.
#[async_trait]
pub trait PageDriver {
    /// Navigates to page `page` and processes its listings
    async fn goto_page(&mut self, page: u32) -> Result<(), CrawlError>;
}

/// Real page driver operating the pager form through the browser
pub struct Paginator<'a, B, S>
where
    B: Browser + Sync,
    S: DocumentSink + Send,
{
    browser: &'a B,
    sink: &'a mut S,
    selectors: &'a SelectorConfig,
    listing: &'a ListingSelectors,
    policy: RetryPolicy,
}

impl<'a, B, S> Paginator<'a, B, S>
where
    B: Browser + Sync,
    S: DocumentSink + Send,
{
    pub fn new(
        browser: &'a B,
        sink: &'a mut S,
        selectors: &'a SelectorConfig,
        listing: &'a ListingSelectors,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            browser,
            sink,
            selectors,
            listing,
            policy,
        }
    }

    /// One page-jump attempt: fill the pager, submit, confirm, extract
    async fn try_goto(&mut self, page: u32) -> BrowserResult<()> {
        let page_text = page.to_string();

        self.browser.wait_present(&self.selectors.page_input).await?;
        self.browser.wait_clickable(&self.selectors.page_submit).await?;
        self.browser.fill(&self.selectors.page_input, &page_text).await?;
        self.browser.click(&self.selectors.page_submit).await?;

        // The pager highlights the page only once it has actually rendered.
        self.browser
            .wait_text_is(&self.selectors.active_page, &page_text)
            .await?;

        extract_current_page(self.browser, self.sink, &self.selectors.item, self.listing).await?;

        Ok(())
    }
}

#[async_trait]
impl<'a, B, S> PageDriver for Paginator<'a, B, S>
where
    B: Browser + Sync,
    S: DocumentSink + Send,
{
    async fn goto_page(&mut self, page: u32) -> Result<(), CrawlError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.try_goto(page).await {
                Ok(()) => return Ok(()),
                Err(e) if self.policy.should_retry(attempt, &e) => {
                    tracing::warn!(
                        "Page {} attempt {}/{} timed out: {}; retrying",
                        page,
                        attempt,
                        self.policy.max_attempts,
                        e
                    );
                    tokio::time::sleep(self.policy.backoff).await;
                }
                Err(e) if e.is_timeout() => {
                    return Err(CrawlError::RetriesExhausted {
                        operation: format!("goto page {}", page),
                        attempts: attempt,
                        source: e,
                    });
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
