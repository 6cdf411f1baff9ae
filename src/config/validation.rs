use crate::config::types::{BrowserConfig, Config, FieldSelectors, SelectorConfig, StoreConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_browser_config(&config.browser)?;
    validate_url("webdriver-url", &config.browser.webdriver_url)?;
    validate_url("site-url", &config.search.site_url)?;
    if config.search.query.is_empty() {
        return Err(ConfigError::Validation(
            "search query cannot be empty".to_string(),
        ));
    }
    validate_store_config(&config.store)?;
    validate_selectors(&config.selectors)?;
    Ok(())
}

/// Validates timing and retry bounds
fn validate_browser_config(config: &BrowserConfig) -> Result<(), ConfigError> {
    if config.wait_timeout_ms < 100 {
        return Err(ConfigError::Validation(format!(
            "wait-timeout-ms must be >= 100ms, got {}ms",
            config.wait_timeout_ms
        )));
    }

    if config.poll_interval_ms == 0 || config.poll_interval_ms > config.wait_timeout_ms {
        return Err(ConfigError::Validation(format!(
            "poll-interval-ms must be between 1ms and the wait timeout, got {}ms",
            config.poll_interval_ms
        )));
    }

    if config.max_attempts < 1 {
        return Err(ConfigError::Validation(format!(
            "max-attempts must be >= 1, got {}",
            config.max_attempts
        )));
    }

    Ok(())
}

fn validate_url(name: &str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidUrl(format!("{}: {} ({})", name, value, e)))?;
    Ok(())
}

fn validate_store_config(config: &StoreConfig) -> Result<(), ConfigError> {
    if config.database_path.is_empty() {
        return Err(ConfigError::Validation(
            "database-path cannot be empty".to_string(),
        ));
    }

    if config.collection.is_empty() {
        return Err(ConfigError::Validation(
            "collection cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates that every configured selector compiles
///
/// Selector errors are reported here, before any browsing starts, rather
/// than mid-crawl when the extractor first uses them.
fn validate_selectors(selectors: &SelectorConfig) -> Result<(), ConfigError> {
    let named = [
        ("query-input", &selectors.query_input),
        ("query-submit", &selectors.query_submit),
        ("total-count", &selectors.total_count),
        ("page-input", &selectors.page_input),
        ("page-submit", &selectors.page_submit),
        ("active-page", &selectors.active_page),
        ("item", &selectors.item),
    ];

    for (name, value) in named {
        validate_selector(name, value)?;
    }

    validate_field_selectors(&selectors.fields)
}

fn validate_field_selectors(fields: &FieldSelectors) -> Result<(), ConfigError> {
    let named = [
        ("fields.image", &fields.image),
        ("fields.price", &fields.price),
        ("fields.deal", &fields.deal),
        ("fields.title", &fields.title),
        ("fields.shop", &fields.shop),
        ("fields.location", &fields.location),
    ];

    for (name, value) in named {
        validate_selector(name, value)?;
    }

    Ok(())
}

fn validate_selector(name: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!(
            "selector '{}' cannot be empty",
            name
        )));
    }

    scraper::Selector::parse(value).map_err(|e| ConfigError::InvalidSelector {
        name: name.to_string(),
        message: e.to_string(),
    })?;

    Ok(())
}
