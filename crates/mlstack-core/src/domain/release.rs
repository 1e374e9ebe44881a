//! Release lists fetched from the package index, and version ordering.

use std::cmp::Ordering;

use semver::Version;
use serde::{Deserialize, Serialize};

/// Substrings that mark a version string as a pre-release.
///
/// Matching is a case-insensitive substring test, not PEP 440 parsing:
/// `1.0.0.dev1` passes, anything containing an `a` or `b` does not.
pub const PRERELEASE_MARKERS: [&str; 5] = ["a", "b", "rc", "alpha", "beta"];

/// Returns true when `version` contains a pre-release marker.
pub fn is_prerelease(version: &str) -> bool {
    let lowered = version.to_ascii_lowercase();
    PRERELEASE_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// Ordering key for a package-index version string.
///
/// Leading dot-separated numerals fill `major.minor.patch` (missing parts are
/// zero, extra parts and suffixes are ignored). Returns `None` when the string
/// does not start with a numeral.
pub fn version_key(raw: &str) -> Option<Version> {
    let trimmed = raw.trim().trim_start_matches(['v', 'V']);
    let mut parts = [0u64; 3];
    let mut count = 0usize;

    for segment in trimmed.split('.') {
        let digits: String = segment.chars().take_while(char::is_ascii_digit).collect();
        let Ok(value) = digits.parse::<u64>() else {
            break;
        };
        if count < parts.len() {
            parts[count] = value;
        }
        count += 1;
        if digits.len() < segment.len() {
            break;
        }
    }

    (count > 0).then(|| Version::new(parts[0], parts[1], parts[2]))
}

/// Compare two version strings by [`version_key`], then lexically.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    version_key(a)
        .cmp(&version_key(b))
        .then_with(|| a.cmp(b))
}

/// Every version string published for one package, in feed order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseList {
    versions: Vec<String>,
}

impl ReleaseList {
    pub fn new<I, S>(versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            versions: versions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(String::as_str)
    }

    /// Drop pre-releases and sort the remainder ascending.
    pub fn stable(&self) -> StableReleaseList {
        let mut versions: Vec<String> = self
            .versions
            .iter()
            .filter(|v| !is_prerelease(v))
            .cloned()
            .collect();
        versions.sort_by(|a, b| compare_versions(a, b));
        versions.dedup();
        StableReleaseList { versions }
    }
}

/// Stable releases sorted ascending by version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StableReleaseList {
    versions: Vec<String>,
}

impl StableReleaseList {
    /// The highest stable version, if any.
    pub fn latest(&self) -> Option<&str> {
        self.versions.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(String::as_str)
    }
}
