//! Internal configuration and API response types.

use std::time::Duration;

use serde::Deserialize;
use serde_json::{Map, Value};
use url::Url;

use crate::config::PypiClientConfig;
use crate::error::PypiResult;

/// Internal configuration for the package index client.
#[derive(Debug, Clone)]
pub struct PypiConfig {
    pub base_url: Url,
    pub user_agent: String,
    pub timeout: Duration,
    pub max_retries: u8,
    /// Base delay in milliseconds for exponential backoff
    pub retry_base_delay_ms: u64,
}

impl PypiConfig {
    /// Validate the public configuration.
    pub fn from_public(config: &PypiClientConfig) -> PypiResult<Self> {
        Ok(Self {
            base_url: Url::parse(&config.base_url)?,
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            max_retries: config.max_retries,
            #[allow(clippy::cast_possible_truncation)] // Duration milliseconds won't exceed u64 in practice
            retry_base_delay_ms: config.retry_base_delay.as_millis() as u64,
        })
    }
}

/// Package document returned by `{base}/{package}/json`.
///
/// Only the `releases` keys are consumed; the per-file metadata is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageDocument {
    pub releases: Map<String, Value>,
}

impl PackageDocument {
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.releases.keys().map(String::as_str)
    }
}
