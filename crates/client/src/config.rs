//! Configuration types for the OpenML client.

use std::time::Duration;
use url::Url;

/// Public OpenML JSON API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.openml.org/api/v1/json";

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("openml-mcp/", env!("CARGO_PKG_VERSION"));

/// Query parameter OpenML reads the API key from.
pub const API_KEY_PARAM: &str = "api_key";

/// Configuration for the OpenML client.
///
/// Built once at startup and shared read-only by every request.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: Url,
    /// API key injected as the `api_key` query parameter.
    pub api_key: Option<String>,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Retry configuration.
    pub retry_config: RetryConfig,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            api_key: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            retry_config: RetryConfig::default(),
        }
    }
}

/// Transport-level retry behaviour.
///
/// Only failures that happen before a response arrives (connect errors,
/// connect timeouts) are retried, immediately and at most `max_retries`
/// times. HTTP error statuses are never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retries.
    pub max_retries: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self { max_retries: 3 }
    }
}

impl RetryConfig {
    /// Create a configuration with no retries.
    pub fn no_retry() -> Self {
        Self { max_retries: 0 }
    }

    /// Check whether a failed attempt should be retried.
    pub fn should_retry(&self, attempt: u32, err: &reqwest::Error) -> bool {
        attempt < self.max_retries && err.is_connect()
    }
}
