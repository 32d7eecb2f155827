//! exchangeratesapi.io integration
//!
//! Latest and historical rates quoted against an arbitrary base currency.
//! Query parameters and the retry schedule are available without the `async`
//! feature; the HTTP client itself requires it. Base and symbol codes are
//! checked before a request is built, and query values are always
//! form-encoded.

use crate::data::window::HistoryWindow;
use std::time::Duration;

pub const EXCHANGE_RATES_BASE_URL: &str = "https://api.exchangeratesapi.io";

/// Retry schedule for transport failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub retry_count: u32,
    /// Wait before the first retry, doubled for each further retry
    pub wait: Duration,
    /// Upper bound on any single wait
    pub max_wait: Duration,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retry_count: 3,
            wait: Duration::from_millis(500),
            max_wait: Duration::from_secs(1),
            timeout: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// Wait before retry number `retry` (1-based)
    pub fn delay(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.wait.saturating_mul(factor).min(self.max_wait)
    }
}

/// Query parameters of a `latest` request
pub fn latest_query(base: &str, symbols: &[&str]) -> Vec<(&'static str, String)> {
    query_params(vec![("base", base.to_string()), ("symbols", symbols.join(","))])
}

/// Query parameters of a `history` request over `window`
pub fn history_query(base: &str, symbols: &[&str], window: &HistoryWindow) -> Vec<(&'static str, String)> {
    query_params(vec![
        ("base", base.to_string()),
        ("symbols", symbols.join(",")),
        ("start_at", window.start_at()),
        ("end_at", window.end_at()),
    ])
}

// Keys come out sorted; empty values are dropped.
fn query_params(mut params: Vec<(&'static str, String)>) -> Vec<(&'static str, String)> {
    params.retain(|(_, v)| !v.is_empty());
    params.sort_by(|a, b| a.0.cmp(b.0));
    params
}

#[cfg(feature = "async")]
pub use client::ExchangeRatesClient;

#[cfg(feature = "async")]
mod client {
    use super::*;
    use crate::currency::normalize_code;
    use crate::data::model::{HistoricalRates, LatestRates};
    use crate::error::{Result, XeError};
    use reqwest::{Client, Request};
    use serde::de::DeserializeOwned;

    const LATEST_PATH: &str = "latest";
    const HISTORY_PATH: &str = "history";

    /// Async client for exchangeratesapi.io
    pub struct ExchangeRatesClient {
        client: Client,
        endpoint: String,
        retry: RetryPolicy,
    }

    impl ExchangeRatesClient {
        /// Create a client against the public endpoint with default retries
        pub fn new() -> Result<Self> {
            Self::with_config(EXCHANGE_RATES_BASE_URL, RetryPolicy::default())
        }

        /// Create a client against `endpoint`
        pub fn with_config(endpoint: &str, retry: RetryPolicy) -> Result<Self> {
            let client = Client::builder()
                .timeout(retry.timeout)
                .build()
                .map_err(|e| XeError::DataError(format!("Failed to create HTTP client: {}", e)))?;

            Ok(Self {
                client,
                endpoint: endpoint.trim_end_matches('/').to_string(),
                retry,
            })
        }

        pub fn endpoint(&self) -> &str {
            &self.endpoint
        }

        /// `GET {endpoint}/latest` with encoded query parameters
        pub fn latest_request(&self, base: &str, symbols: &[&str]) -> Result<Request> {
            self.request(LATEST_PATH, &latest_query(base, symbols))
        }

        /// `GET {endpoint}/history` with encoded query parameters
        pub fn history_request(
            &self,
            base: &str,
            symbols: &[&str],
            window: &HistoryWindow,
        ) -> Result<Request> {
            self.request(HISTORY_PATH, &history_query(base, symbols, window))
        }

        /// Latest rates of `symbols` per one unit of `base`
        pub async fn latest_rates(&self, base: &str, symbols: &[&str]) -> Result<LatestRates> {
            let (base, symbols) = normalize_codes(base, symbols)?;
            let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
            let request = self.latest_request(&base, &symbols)?;
            self.get_json(request, "GetLatestRate").await
        }

        /// Rates of `symbols` per one unit of `base` over `window`
        pub async fn historical_rates(
            &self,
            base: &str,
            symbols: &[&str],
            window: &HistoryWindow,
        ) -> Result<HistoricalRates> {
            let (base, symbols) = normalize_codes(base, symbols)?;
            let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
            let request = self.history_request(&base, &symbols, window)?;
            self.get_json(request, "GetHistoricalRates").await
        }

        fn request(&self, path: &str, query: &[(&'static str, String)]) -> Result<Request> {
            let url = format!("{}/{}", self.endpoint, path);
            self.client
                .get(&url)
                .query(query)
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .build()
                .map_err(|e| XeError::http(url, "BuildRequest", e))
        }

        // Only transport failures are retried; error statuses and bad bodies
        // fail immediately.
        async fn get_json<T: DeserializeOwned>(&self, request: Request, operation: &str) -> Result<T> {
            let url = request.url().to_string();
            let mut retry = 0;
            let response = loop {
                let attempt = request
                    .try_clone()
                    .ok_or_else(|| XeError::http(&url, operation, "request cannot be cloned"))?;
                match self.client.execute(attempt).await {
                    Ok(response) => break response,
                    Err(e) if !e.is_builder() && retry < self.retry.retry_count => {
                        retry += 1;
                        let delay = self.retry.delay(retry);
                        log::warn!(
                            "{} failed ({}), retry {}/{} in {:?}",
                            operation,
                            e,
                            retry,
                            self.retry.retry_count,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                    }
                    Err(e) => return Err(XeError::http(url, operation, e)),
                }
            };

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(XeError::http(
                    url,
                    operation,
                    format!("received non 2XX response: {}: {}", status, body),
                ));
            }

            response
                .json::<T>()
                .await
                .map_err(|e| XeError::http(url, operation, format!("decode error: {}", e)))
        }
    }

    fn normalize_codes(base: &str, symbols: &[&str]) -> Result<(String, Vec<String>)> {
        let base = normalize_code(base)?;
        let symbols = symbols
            .iter()
            .map(|s| normalize_code(s))
            .collect::<Result<Vec<_>>>()?;
        Ok((base, symbols))
    }
}
