//! HTTP GET with bounded retries and linear backoff
//!
//! Used by both the geocoding and the routing client. Connection failures,
//! timeouts and 5xx answers are retried up to `max_attempts` times in total,
//! waiting `n * backoff_base` after failed attempt `n`. Any other response,
//! whatever its status, is handed back to the caller to interpret.

use std::time::{Duration, Instant};

use reqwest::{Client, Response};
use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::error::{FetchError, Retryable};

/// Outbound HTTP GET with a bounded retry policy
#[derive(Debug, Clone)]
pub struct ResilientFetcher {
    client: Client,
    policy: FetchConfig,
    timeout: Duration,
}

impl ResilientFetcher {
    /// Create a fetcher
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(policy: FetchConfig, timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| FetchError::InvalidRequest(e.to_string()))?;

        Ok(Self {
            client,
            policy,
            timeout,
        })
    }

    /// Perform a GET, retrying transient failures
    ///
    /// Returns the first response that is not a 5xx, or
    /// [`FetchError::Exhausted`] once every attempt failed transiently.
    /// Non-transient failures are returned immediately.
    #[allow(clippy::cast_possible_truncation)]
    pub async fn get(
        &self,
        url: &str,
        params: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> Result<Response, FetchError> {
        let max_attempts = self.policy.max_attempts.max(1);
        let start = Instant::now();
        let mut attempt = 0u32;

        loop {
            attempt += 1;

            match self.attempt(url, params, headers).await {
                Ok(response) => {
                    if attempt > 1 {
                        debug!(
                            %url,
                            attempts = attempt,
                            duration_ms = start.elapsed().as_millis() as u64,
                            "Request succeeded after retries"
                        );
                    }
                    return Ok(response);
                },
                Err(err) if !err.is_retryable() => {
                    debug!(%url, attempts = attempt, error = %err, "Request failed with non-retryable error");
                    return Err(err);
                },
                Err(err) => {
                    if attempt >= max_attempts {
                        warn!(
                            %url,
                            attempts = attempt,
                            error = %err,
                            "Request failed after max attempts"
                        );
                        return Err(FetchError::Exhausted {
                            attempts: attempt,
                            last: Box::new(err),
                        });
                    }

                    let delay = self.policy.delay_after_attempt(attempt);
                    warn!(
                        %url,
                        attempt,
                        max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "Request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                },
            }
        }
    }

    async fn attempt(
        &self,
        url: &str,
        params: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> Result<Response, FetchError> {
        let mut request = self.client.get(url).query(params).timeout(self.timeout);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.convert_error(&e, url))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(FetchError::ServerError {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    fn convert_error(&self, error: &reqwest::Error, url: &str) -> FetchError {
        if error.is_timeout() {
            return FetchError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.timeout.as_secs(),
            };
        }

        if error.is_builder() {
            return FetchError::InvalidRequest(error.to_string());
        }

        FetchError::ConnectionFailed {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}
