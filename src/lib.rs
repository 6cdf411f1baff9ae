//! Taosnap: paginated search-result snapshotter
//!
//! This crate drives a WebDriver-controlled browser through the result pages
//! of an e-commerce search, extracts the product listings rendered on each
//! page, and persists them as schema-less documents.

pub mod browser;
pub mod config;
pub mod crawl;
pub mod extract;
pub mod storage;

use thiserror::Error;

/// Main error type for Taosnap operations
#[derive(Debug, Error)]
pub enum TaosnapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Browser error: {0}")]
    Browser(#[from] browser::BrowserError),

    #[error("Crawl error: {0}")]
    Crawl(#[from] crawl::CrawlError),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid CSS selector '{name}': {message}")]
    InvalidSelector { name: String, message: String },
}

/// Result type alias for Taosnap operations
pub type Result<T> = std::result::Result<T, TaosnapError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use extract::ProductRecord;
