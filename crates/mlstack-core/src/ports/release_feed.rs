//! Remote version feed port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ReleaseList;

/// Errors from release feed operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The request could not complete (DNS, connect, timeout).
    #[error("Network error: {message}")]
    Network { message: String },

    /// The index answered with a non-success status.
    #[error("Package index returned status {status} for {url}")]
    Status { status: u16, url: String },

    /// The response body was not the expected JSON document.
    #[error("Invalid package index response: {message}")]
    InvalidResponse { message: String },

    /// The client was misconfigured (bad base URL).
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Result type alias for release feed operations.
pub type FeedResult<T> = Result<T, FeedError>;

/// Port trait for fetching the release history of a package.
///
/// Failures propagate: there is no local fallback at this layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseFeedPort: Send + Sync {
    /// Every published version of `package`, in feed order.
    async fn get_releases(&self, package: &str) -> FeedResult<ReleaseList>;
}
