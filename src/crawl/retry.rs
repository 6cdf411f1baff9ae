//! Bounded retry policy for timed-out page loads
//!
//! The site frequently loads slowly enough that a bounded wait expires even
//! though the page would have rendered eventually. Those operations are
//! retried whole, under an explicit attempt cap with a fixed backoff, so a
//! permanently broken page fails the run instead of hanging it.

use crate::browser::BrowserError;
use crate::config::BrowserConfig;
use std::time::Duration;

/// Attempt cap and backoff for retrying a timed-out operation
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first
    pub max_attempts: u32,

    /// Fixed delay between attempts
    pub backoff: Duration,
}

impl RetryPolicy {
    /// Builds the policy from the browser configuration
    pub fn from_config(config: &BrowserConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            backoff: Duration::from_millis(config.retry_backoff_ms),
        }
    }

    /// Whether a failed attempt should be retried
    ///
    /// Only timeout-class errors are retried; anything else (a dead session,
    /// a protocol error) propagates immediately.
    pub fn should_retry(&self, attempt: u32, error: &BrowserError) -> bool {
        error.is_timeout() && attempt < self.max_attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeout() -> BrowserError {
        BrowserError::WaitTimeout {
            what: "presence of '#q'".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    fn policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            backoff: Duration::from_millis(0),
        }
    }

    #[test]
    fn test_retries_timeout_below_cap() {
        let policy = policy();
        assert!(policy.should_retry(1, &timeout()));
        assert!(policy.should_retry(2, &timeout()));
    }

    #[test]
    fn test_stops_at_attempt_cap() {
        let policy = policy();
        assert!(!policy.should_retry(3, &timeout()));
    }

    #[test]
    fn test_never_retries_non_timeout_errors() {
        let policy = policy();
        let error = BrowserError::ElementNotFound("#q".to_string());
        assert!(!policy.should_retry(1, &error));
    }
}
