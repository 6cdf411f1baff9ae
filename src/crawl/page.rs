//! Per-page extraction step shared by search and pagination
//!
//! Waits for the listing container to render, reads the page source, and
//! hands the extracted records to the sink.

use crate::browser::{Browser, BrowserResult};
use crate::extract::{extract_listings, ListingSelectors};
use crate::storage::{persist_records, DocumentSink};

/// Extracts and persists every listing on the currently displayed page
///
/// A timeout waiting for the listing container propagates to the caller,
/// which owns the retry of the surrounding navigation step. Persistence
/// failures are isolated per record and never surface here.
///
/// # Returns
///
/// The number of records extracted from the page.
pub async fn extract_current_page<B, S>(
    browser: &B,
    sink: &mut S,
    item_selector: &str,
    listing: &ListingSelectors,
) -> BrowserResult<usize>
where
    B: Browser + Sync + ?Sized,
    S: DocumentSink + Send + ?Sized,
{
    browser.wait_present(item_selector).await?;

    let html = browser.page_source().await?;
    let records = extract_listings(&html, listing);
    tracing::info!("Extracted {} listings from current page", records.len());

    persist_records(sink, &records);

    Ok(records.len())
}
