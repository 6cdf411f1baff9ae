//! WebDriver-backed browser implementation
//!
//! Wraps a thirtyfour WebDriver session behind the Browser trait. Bounded
//! waits are explicit poll-until-deadline loops so a timeout surfaces as a
//! distinct error variant instead of a generic WebDriver failure.

use crate::browser::{Browser, BrowserError, BrowserResult};
use crate::config::BrowserConfig;
use async_trait::async_trait;
use std::time::{Duration, Instant};
use thirtyfour::prelude::*;

/// Browser implementation driving a real WebDriver session
pub struct WebDriverBrowser {
    driver: WebDriver,
    wait_timeout: Duration,
    poll_interval: Duration,
}

impl WebDriverBrowser {
    /// Connects to the WebDriver endpoint and maximizes the window
    ///
    /// # Arguments
    ///
    /// * `config` - Browser endpoint and wait timing configuration
    pub async fn connect(config: &BrowserConfig) -> BrowserResult<Self> {
        let caps = DesiredCapabilities::chrome();
        let driver = WebDriver::new(&config.webdriver_url, caps).await?;
        driver.maximize_window().await?;

        Ok(Self {
            driver,
            wait_timeout: Duration::from_millis(config.wait_timeout_ms),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        })
    }

    fn timeout_error(&self, what: &str) -> BrowserError {
        BrowserError::WaitTimeout {
            what: what.to_string(),
            timeout: self.wait_timeout,
        }
    }

    async fn find(&self, css: &str) -> BrowserResult<WebElement> {
        self.driver
            .find(By::Css(css))
            .await
            .map_err(|_| BrowserError::ElementNotFound(css.to_string()))
    }
}

#[async_trait]
impl Browser for WebDriverBrowser {
    async fn open(&self, url: &str) -> BrowserResult<()> {
        tracing::debug!("Navigating to {}", url);
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn wait_present(&self, css: &str) -> BrowserResult<()> {
        let deadline = Instant::now() + self.wait_timeout;
        loop {
            if self.driver.find(By::Css(css)).await.is_ok() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(self.timeout_error(&format!("presence of '{}'", css)));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    async fn wait_clickable(&self, css: &str) -> BrowserResult<()> {
        let deadline = Instant::now() + self.wait_timeout;
        loop {
            if let Ok(element) = self.driver.find(By::Css(css)).await {
                let displayed = element.is_displayed().await.unwrap_or(false);
                let enabled = element.is_enabled().await.unwrap_or(false);
                if displayed && enabled {
                    return Ok(());
                }
            }
            if Instant::now() >= deadline {
                return Err(self.timeout_error(&format!("clickability of '{}'", css)));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    async fn fill(&self, css: &str, text: &str) -> BrowserResult<()> {
        let element = self.find(css).await?;
        element.clear().await?;
        element.send_keys(text).await?;
        Ok(())
    }

    async fn click(&self, css: &str) -> BrowserResult<()> {
        let element = self.find(css).await?;
        element.click().await?;
        Ok(())
    }

    async fn wait_text_is(&self, css: &str, expected: &str) -> BrowserResult<()> {
        let deadline = Instant::now() + self.wait_timeout;
        loop {
            if let Ok(element) = self.driver.find(By::Css(css)).await {
                if let Ok(text) = element.text().await {
                    if text.trim() == expected {
                        return Ok(());
                    }
                }
            }
            if Instant::now() >= deadline {
                return Err(
                    self.timeout_error(&format!("text '{}' in element '{}'", expected, css))
                );
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    async fn read_text(&self, css: &str) -> BrowserResult<String> {
        let element = self.find(css).await?;
        let text = element.text().await?;
        Ok(text.trim().to_string())
    }

    async fn page_source(&self) -> BrowserResult<String> {
        Ok(self.driver.source().await?)
    }

    async fn close(&self) -> BrowserResult<()> {
        tracing::debug!("Closing browser session");
        self.driver.clone().quit().await?;
        Ok(())
    }
}
