//! HTTP client with retry.

use crate::error::FetchError;
use crate::retry::RetryStrategy;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, warn};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Browser user-agent sent on every request. The CSS endpoint keys its
/// payload format on the client and serves legacy formats to unrecognized
/// agents.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36";

/// HTTP client with a fixed-interval retry budget.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    retry_strategy: RetryStrategy,
}

impl HttpClient {
    /// Creates a new HTTP client with default settings.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new HTTP client with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            inner: client,
            retry_strategy: RetryStrategy::default(),
        })
    }

    /// Sets the retry strategy for this client.
    pub fn with_retry_strategy(mut self, strategy: RetryStrategy) -> Self {
        self.retry_strategy = strategy;
        self
    }

    /// Fetches a URL as text, retrying transient failures.
    ///
    /// An empty body maps to [`FetchError::NotFound`]; the CSS endpoint
    /// answers 200 with no content for unknown families.
    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.get_with_retry(url).await?;
        let body = response.text().await?;
        if body.is_empty() {
            return Err(FetchError::NotFound(url.to_string()));
        }
        Ok(body)
    }

    /// Fetches a URL as raw bytes, retrying transient failures.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.get_with_retry(url).await?;
        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(FetchError::NotFound(url.to_string()));
        }
        Ok(body.to_vec())
    }

    /// Performs a GET request, retrying per the configured strategy.
    async fn get_with_retry(&self, url: &str) -> Result<Response, FetchError> {
        let mut attempts = 0;
        let max_attempts = self.retry_strategy.max_attempts;

        loop {
            attempts += 1;
            debug!(url = %url, attempt = attempts, "Making GET request");

            match self.inner.get(url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    if attempts < max_attempts && self.retry_strategy.should_retry_status(status) {
                        warn!(
                            url = %url,
                            status = %status,
                            attempt = attempts,
                            "Retryable status, retrying"
                        );
                        tokio::time::sleep(self.retry_strategy.delay).await;
                        continue;
                    }

                    return Err(FetchError::InvalidResponse(format!(
                        "Unexpected status code: {status}"
                    )));
                }
                Err(error) => {
                    if attempts < max_attempts && self.retry_strategy.should_retry(&error) {
                        warn!(
                            url = %url,
                            error = %error,
                            attempt = attempts,
                            "Request failed, retrying"
                        );
                        tokio::time::sleep(self.retry_strategy.delay).await;
                        continue;
                    }
                    return Err(error.into());
                }
            }
        }
    }
}
