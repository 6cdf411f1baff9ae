//! Configuration module for Taosnap
//!
//! Handles loading, parsing, and validating TOML configuration files,
//! including the full set of CSS selectors the crawl depends on.

mod parser;
mod types;
mod validation;

pub use types::{
    BrowserConfig, Config, FieldSelectors, SearchConfig, SelectorConfig, StoreConfig,
};

pub use parser::{compute_config_hash, load_config, load_config_with_hash};
