//! Browser automation layer
//!
//! Defines the selector-addressed browser interface the crawl drives, and
//! its WebDriver-backed implementation. Keeping the interface behind a trait
//! lets the control loops run against a scripted browser in tests.

mod webdriver;

pub use webdriver::WebDriverBrowser;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors from browser interactions
///
/// Wait-timeouts are a distinct variant so the retry loops can tell a slow
/// page apart from a broken session.
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("Timed out after {timeout:?} waiting for {what}")]
    WaitTimeout { what: String, timeout: Duration },

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),
}

impl BrowserError {
    /// True if this error is a bounded wait that ran out of time
    pub fn is_timeout(&self) -> bool {
        matches!(self, BrowserError::WaitTimeout { .. })
    }
}

/// Result type for browser operations
pub type BrowserResult<T> = Result<T, BrowserError>;

/// Selector-addressed browser automation interface
///
/// Every operation takes a CSS selector rather than an element handle, so
/// implementations stay free to re-locate elements between calls (pages
/// re-render between waits) and tests can script responses.
#[async_trait]
pub trait Browser {
    /// Navigates to the given URL
    async fn open(&self, url: &str) -> BrowserResult<()>;

    /// Waits until an element matching the selector is present
    async fn wait_present(&self, css: &str) -> BrowserResult<()>;

    /// Waits until a matching element is displayed and enabled
    async fn wait_clickable(&self, css: &str) -> BrowserResult<()>;

    /// Clears the matching input and types the given text into it
    async fn fill(&self, css: &str, text: &str) -> BrowserResult<()>;

    /// Clicks the first matching element
    async fn click(&self, css: &str) -> BrowserResult<()>;

    /// Waits until the matching element's trimmed text equals `expected`
    async fn wait_text_is(&self, css: &str, expected: &str) -> BrowserResult<()>;

    /// Reads the trimmed text of the first matching element
    async fn read_text(&self, css: &str) -> BrowserResult<String>;

    /// Returns the full rendered markup of the current page
    async fn page_source(&self) -> BrowserResult<String>;

    /// Releases the underlying browser session
    async fn close(&self) -> BrowserResult<()>;
}
