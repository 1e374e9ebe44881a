//! Internal error types for package index operations.
//!
//! These errors are internal to `mlstack-pypi` and are mapped to the core
//! `FeedError` at the port boundary.

use thiserror::Error;

/// Result type alias for package index operations.
pub type PypiResult<T> = Result<T, PypiError>;

#[derive(Debug, Error)]
pub enum PypiError {
    /// The index answered with a non-success status.
    #[error("Package index request failed with status {status}: {url}")]
    ApiRequestFailed { status: u16, url: String },

    /// The response was JSON but not a package document.
    #[error("Invalid response from package index: {message}")]
    InvalidResponse { message: String },

    /// The package name cannot be placed in a URL path.
    #[error("Invalid package name '{name}'")]
    InvalidPackageName { name: String },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
