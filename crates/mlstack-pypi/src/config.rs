//! Public configuration for the package index client.
//!
//! The internal config is derived from this.

use std::time::Duration;

/// Default package index JSON API root.
pub const DEFAULT_INDEX_URL: &str = "https://pypi.org/pypi";

/// Configuration for the package index client.
///
/// # Example
///
/// ```
/// use mlstack_pypi::PypiClientConfig;
/// use std::time::Duration;
///
/// let config = PypiClientConfig::new()
///     .with_base_url("https://mirror.example/pypi")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct PypiClientConfig {
    /// JSON API root; package documents live at `{base_url}/{package}/json`
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Maximum number of retry attempts for transient errors
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
}

impl Default for PypiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_INDEX_URL.to_string(),
            user_agent: concat!("mlstack-pypi/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(10),
            max_retries: 0,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

impl PypiClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the JSON API root.
    ///
    /// Defaults to `https://pypi.org/pypi`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the base URL only when one is given.
    #[must_use]
    pub fn with_optional_base_url(self, url: Option<String>) -> Self {
        match url {
            Some(url) => self.with_base_url(url),
            None => self,
        }
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retry attempts for transient errors.
    ///
    /// Defaults to no retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PypiClientConfig::new();
        assert_eq!(config.base_url, "https://pypi.org/pypi");
        assert!(config.user_agent.starts_with("mlstack-pypi/"));
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.max_retries, 0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PypiClientConfig::new()
            .with_base_url("https://mirror.example/pypi")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(3))
            .with_max_retries(2);

        assert_eq!(config.base_url, "https://mirror.example/pypi");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.max_retries, 2);
    }

    #[test]
    fn test_optional_base_url() {
        let unchanged = PypiClientConfig::new().with_optional_base_url(None);
        assert_eq!(unchanged.base_url, DEFAULT_INDEX_URL);

        let custom = PypiClientConfig::new().with_optional_base_url(Some("http://x".to_string()));
        assert_eq!(custom.base_url, "http://x");
    }
}
