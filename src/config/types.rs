use serde::Deserialize;

/// Main configuration structure for Taosnap
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub browser: BrowserConfig,
    pub search: SearchConfig,
    pub store: StoreConfig,
    pub selectors: SelectorConfig,
}

/// Browser session and retry behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserConfig {
    /// URL of the WebDriver endpoint (e.g. a local chromedriver)
    #[serde(rename = "webdriver-url")]
    pub webdriver_url: String,

    /// Maximum time a single bounded wait may block (milliseconds)
    #[serde(rename = "wait-timeout-ms")]
    pub wait_timeout_ms: u64,

    /// Interval between element polls inside a bounded wait (milliseconds)
    #[serde(rename = "poll-interval-ms", default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Maximum attempts for a navigation or page-jump operation
    #[serde(rename = "max-attempts", default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay between retry attempts (milliseconds)
    #[serde(rename = "retry-backoff-ms", default = "default_retry_backoff")]
    pub retry_backoff_ms: u64,
}

fn default_poll_interval() -> u64 {
    250
}

fn default_max_attempts() -> u32 {
    5
}

fn default_retry_backoff() -> u64 {
    2000
}

/// Search target configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Root URL of the site to search
    #[serde(rename = "site-url")]
    pub site_url: String,

    /// Fixed query term submitted into the search form
    pub query: String,
}

/// Document store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path to the SQLite database file backing the document store
    #[serde(rename = "database-path")]
    pub database_path: String,

    /// Collection name the extracted records are inserted into
    pub collection: String,
}

/// CSS selectors for every element the crawl interacts with
#[derive(Debug, Clone, Deserialize)]
pub struct SelectorConfig {
    /// Search query input box
    #[serde(rename = "query-input")]
    pub query_input: String,

    /// Search submit button
    #[serde(rename = "query-submit")]
    pub query_submit: String,

    /// Element carrying the total-result-count text
    #[serde(rename = "total-count")]
    pub total_count: String,

    /// Page-jump input box
    #[serde(rename = "page-input")]
    pub page_input: String,

    /// Page-jump submit button
    #[serde(rename = "page-submit")]
    pub page_submit: String,

    /// Element whose text reflects the currently displayed page number
    #[serde(rename = "active-page")]
    pub active_page: String,

    /// Selector matching every listing item on a result page
    pub item: String,

    /// Per-item sub-selectors for the six record fields
    pub fields: FieldSelectors,
}

/// Sub-selectors applied within a single listing item node
#[derive(Debug, Clone, Deserialize)]
pub struct FieldSelectors {
    pub image: String,
    pub price: String,
    pub deal: String,
    pub title: String,
    pub shop: String,
    pub location: String,
}
