//! Package index client.

use tracing::debug;

use crate::config::PypiClientConfig;
use crate::error::PypiResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{PackageDocument, PypiConfig};
use crate::url::build_release_url;

/// Default client using the reqwest HTTP backend.
pub type DefaultPypiClient = PypiClient<ReqwestBackend>;

/// Client for the package index JSON API.
///
/// Generic over its HTTP backend for testing. External code uses
/// [`DefaultPypiClient`] through `ReleaseFeedPort`.
pub struct PypiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: PypiConfig,
}

impl DefaultPypiClient {
    /// Create a client, failing on an unparseable base URL or TLS setup.
    pub fn new(config: &PypiClientConfig) -> Result<Self, mlstack_core::FeedError> {
        Self::build(config).map_err(crate::port::map_error)
    }

    fn build(config: &PypiClientConfig) -> PypiResult<Self> {
        let config = PypiConfig::from_public(config)?;
        let backend = ReqwestBackend::new(&config)?;
        Ok(Self { backend, config })
    }
}

impl<B: HttpBackend> PypiClient<B> {
    /// Create a client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: PypiConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// Every version key published for `package`.
    pub(crate) async fn fetch_versions(&self, package: &str) -> PypiResult<Vec<String>> {
        let url = build_release_url(&self.config, package)?;
        debug!(%url, "Fetching release history");

        let document: PackageDocument = self.backend.get_json(&url).await?;
        Ok(document.versions().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PypiError;
    use crate::http::testing::FakeBackend;
    use serde_json::json;

    pub fn test_config() -> PypiConfig {
        PypiConfig::from_public(&PypiClientConfig::default()).unwrap()
    }

    #[test]
    fn test_default_client_creation() {
        assert!(DefaultPypiClient::new(&PypiClientConfig::new()).is_ok());
    }

    #[test]
    fn test_bad_base_url_is_a_configuration_error() {
        let config = PypiClientConfig::new().with_base_url("::not a url::");
        let err = DefaultPypiClient::new(&config).err().unwrap();
        assert!(matches!(err, mlstack_core::FeedError::Configuration { .. }));
    }

    #[tokio::test]
    async fn test_fetch_versions_reads_release_keys() {
        let backend = FakeBackend::new().with_response(
            "/ultralytics/json",
            json!({"releases": {"8.0.0": [], "8.3.40": [{"filename": "x.whl"}]}}),
        );
        let client = PypiClient::with_backend(test_config(), backend);

        let mut versions = client.fetch_versions("ultralytics").await.unwrap();
        versions.sort();
        assert_eq!(versions, vec!["8.0.0", "8.3.40"]);
        assert_eq!(
            client.backend.requests(),
            vec!["https://pypi.org/pypi/ultralytics/json"]
        );
    }

    #[tokio::test]
    async fn test_fetch_versions_rejects_unexpected_shape() {
        let backend = FakeBackend::new().with_response("ultralytics", json!({"info": {}}));
        let client = PypiClient::with_backend(test_config(), backend);

        let err = client.fetch_versions("ultralytics").await.unwrap_err();
        assert!(matches!(err, PypiError::JsonParse(_)));
    }
}
