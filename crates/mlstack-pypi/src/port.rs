//! `ReleaseFeedPort` implementation for `PypiClient`.

use async_trait::async_trait;
use mlstack_core::{FeedError, FeedResult, ReleaseFeedPort, ReleaseList};
use tracing::debug;

use crate::client::PypiClient;
use crate::error::PypiError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `PypiError` to core `FeedError`.
pub(crate) fn map_error(err: PypiError) -> FeedError {
    match err {
        PypiError::ApiRequestFailed { status, url } => FeedError::Status { status, url },
        PypiError::InvalidResponse { message } => FeedError::InvalidResponse { message },
        PypiError::InvalidPackageName { name } => FeedError::Configuration {
            message: format!("invalid package name '{name}'"),
        },
        PypiError::Network(e) => FeedError::Network {
            message: e.to_string(),
        },
        PypiError::InvalidUrl(e) => FeedError::Configuration {
            message: e.to_string(),
        },
        PypiError::JsonParse(e) => FeedError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> ReleaseFeedPort for PypiClient<B> {
    async fn get_releases(&self, package: &str) -> FeedResult<ReleaseList> {
        let versions = self.fetch_versions(package).await.map_err(map_error)?;
        debug!(package, count = versions.len(), "Fetched release history");
        Ok(ReleaseList::new(versions))
    }
}
