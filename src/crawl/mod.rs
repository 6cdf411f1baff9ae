//! Crawl control loops
//!
//! This module contains the core crawling logic:
//! - Submitting the search and priming the first page
//! - Jumping through result pages in order
//! - Bounded retry of timed-out page loads
//! - Overall orchestration and browser teardown

mod navigator;
mod orchestrator;
mod page;
mod paginator;
mod retry;

pub use navigator::search;
pub use orchestrator::{parse_total_pages, run_crawl, visit_pages};
pub use page::extract_current_page;
pub use paginator::{PageDriver, Paginator};
pub use retry::RetryPolicy;

use crate::browser::BrowserError;
use thiserror::Error;

/// Errors from the crawl control loops
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("No digits found in total-count text '{text}'")]
    TotalCount { text: String },

    #[error("{operation} failed after {attempts} attempts: {source}")]
    RetriesExhausted {
        operation: String,
        attempts: u32,
        source: BrowserError,
    },

    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),
}
