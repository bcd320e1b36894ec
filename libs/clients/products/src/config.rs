use core_config::{env_or_default, env_parse, ConfigError, FromEnv};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_RETRIES: u32 = 2;
pub const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(200);

/// Products API client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, e.g. `http://localhost:5000/api`
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Extra attempts for GET requests after a retryable failure
    pub max_retries: u32,
    /// Delay before the first retry; grows linearly with each attempt
    pub retry_backoff: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retry_backoff(mut self, retry_backoff: Duration) -> Self {
        self.retry_backoff = retry_backoff;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_backoff: DEFAULT_RETRY_BACKOFF,
        }
    }
}

impl FromEnv for ClientConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = env_or_default("PRODUCTS_API_URL", DEFAULT_BASE_URL);
        let timeout_secs = env_parse("PRODUCTS_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let max_retries = env_parse("PRODUCTS_API_MAX_RETRIES", DEFAULT_MAX_RETRIES)?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            max_retries,
            retry_backoff: DEFAULT_RETRY_BACKOFF,
        })
    }
}
