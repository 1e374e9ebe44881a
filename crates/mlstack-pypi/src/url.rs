//! URL construction for the package index JSON API.

use url::Url;

use crate::error::{PypiError, PypiResult};
use crate::models::PypiConfig;

/// Distribution names are ASCII letters, digits, `-`, `_` and `.`.
fn is_valid_package_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Build `{base}/{package}/json`.
pub fn build_release_url(config: &PypiConfig, package: &str) -> PypiResult<Url> {
    if !is_valid_package_name(package) {
        return Err(PypiError::InvalidPackageName {
            name: package.to_string(),
        });
    }

    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}/{package}/json"));
    Ok(url)
}
