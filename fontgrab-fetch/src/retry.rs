//! Retry strategy for HTTP requests.

use std::time::Duration;

/// Default attempt budget: the initial request plus five retries.
const DEFAULT_MAX_ATTEMPTS: u32 = 6;

/// Strategy for retrying failed requests.
///
/// Retries are spaced at a fixed interval; the CSS and binary endpoints
/// recover from transient errors quickly, so no backoff curve is applied.
#[derive(Debug, Clone)]
pub struct RetryStrategy {
    /// Maximum number of attempts, including the first.
    pub max_attempts: u32,
    /// Delay between attempts.
    pub delay: Duration,
}

impl RetryStrategy {
    /// Creates a strategy with the given attempt budget and a one second
    /// spacing.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            delay: Duration::from_secs(1),
        }
    }

    /// Disables retries.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            delay: Duration::ZERO,
        }
    }

    /// Sets the delay between attempts.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Determines if a transport error should be retried.
    pub fn should_retry(&self, error: &reqwest::Error) -> bool {
        // Retry on connection errors and timeouts
        error.is_connect() || error.is_timeout()
    }

    /// Determines if a response status should be retried.
    pub fn should_retry_status(&self, status: reqwest::StatusCode) -> bool {
        status.is_server_error() || status == reqwest::StatusCode::TOO_MANY_REQUESTS
    }
}

impl Default for RetryStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budget() {
        // One initial request plus five retries.
        let strategy = RetryStrategy::default();
        assert_eq!(strategy.max_attempts, 6);
        assert_eq!(strategy.delay, Duration::from_secs(1));
    }

    #[test]
    fn test_no_retry() {
        let strategy = RetryStrategy::no_retry();
        assert_eq!(strategy.max_attempts, 1);
        assert_eq!(strategy.delay, Duration::ZERO);
    }

    #[test]
    fn test_retryable_statuses() {
        let strategy = RetryStrategy::default();
        assert!(strategy.should_retry_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
        assert!(strategy.should_retry_status(reqwest::StatusCode::TOO_MANY_REQUESTS));
        assert!(!strategy.should_retry_status(reqwest::StatusCode::NOT_FOUND));
        assert!(!strategy.should_retry_status(reqwest::StatusCode::FORBIDDEN));
    }
}
