//! Detection-library family resolution.
//!
//! Produces the detector specifier and its companion framework build from
//! the package index release history.

use std::sync::Arc;

use tracing::{debug, info};

use crate::compat::{
    DEFAULT_FAMILY_KEY, DETECTOR_FRAMEWORK_PACKAGE, DETECTOR_PACKAGE, FALLBACK_DETECTOR_VERSION,
    FAMILY_FRAMEWORK_TABLE, companion_framework_version, match_or_first,
};
use crate::domain::{Stack, VersionFamily, version_key};
use crate::ports::{FeedResult, ReleaseFeedPort};

/// Resolves `{detector, framework}` pairs for a version family.
pub struct DetectorResolver {
    feed: Arc<dyn ReleaseFeedPort>,
}

impl DetectorResolver {
    pub fn new(feed: Arc<dyn ReleaseFeedPort>) -> Self {
        Self { feed }
    }

    /// Highest stable detector release, `None` when the feed has none.
    pub async fn latest_stable(&self) -> FeedResult<Option<String>> {
        let releases = self.feed.get_releases(DETECTOR_PACKAGE).await?;
        let stable = releases.stable();
        debug!(
            package = DETECTOR_PACKAGE,
            releases = releases.len(),
            stable = stable.len(),
            latest = ?stable.latest(),
            "Filtered release history"
        );
        Ok(stable.latest().map(str::to_string))
    }

    /// Resolve the two-entry detector stack.
    ///
    /// The release history is fetched for every family; a feed failure
    /// propagates, an empty stable list falls back to a pinned version.
    pub async fn resolve(&self, family: VersionFamily, gpu: bool) -> FeedResult<Stack> {
        let latest = self.latest_stable().await?;
        let spec = detector_spec(family, latest.as_deref());
        let key = family_key(family, latest.as_deref());
        let framework = companion_framework_version(key, gpu);

        info!(%family, family_key = key, gpu, detector = %spec, framework, "Resolved detector stack");

        let mut stack = Stack::new();
        stack.insert(DETECTOR_PACKAGE, spec);
        stack.insert(DETECTOR_FRAMEWORK_PACKAGE, framework);
        Ok(stack)
    }
}

/// Detector specifier for a family.
///
/// `latest` tracks the newest stable release with an open upper bound; the
/// major families get a `[N.0.0, N+1.0.0)` window.
pub fn detector_spec(family: VersionFamily, latest_stable: Option<&str>) -> String {
    match family.major() {
        Some(major) => format!("{DETECTOR_PACKAGE}>={major}.0.0,<{}.0.0", major + 1),
        None => latest_stable.map_or_else(
            || FALLBACK_DETECTOR_VERSION.to_string(),
            |latest| format!("{DETECTOR_PACKAGE}>={latest}"),
        ),
    }
}

/// Row key of the family/framework table.
///
/// For `latest` the major of the newest stable release is used when the
/// table knows it, otherwise the default row.
pub fn family_key(family: VersionFamily, latest_stable: Option<&str>) -> &'static str {
    let major = family
        .major()
        .or_else(|| latest_stable.and_then(version_key).map(|v| v.major));

    let Some(major) = major else {
        return DEFAULT_FAMILY_KEY;
    };
    let major = major.to_string();
    match match_or_first(&FAMILY_FRAMEWORK_TABLE, |row| row.family_key == major) {
        Ok(row) => row.family_key,
        Err(first) => {
            debug!(
                %major,
                fallback = first.family_key,
                "Unknown detector major, using the first family row"
            );
            first.family_key
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReleaseList;
    use crate::ports::{FeedError, MockReleaseFeedPort};

    fn feed_with(versions: &'static [&'static str]) -> Arc<dyn ReleaseFeedPort> {
        let mut feed = MockReleaseFeedPort::new();
        feed.expect_get_releases()
            .returning(move |_| Ok(ReleaseList::new(versions.iter().copied())));
        Arc::new(feed)
    }

    #[test]
    fn test_family_windows() {
        assert_eq!(
            detector_spec(VersionFamily::V8, Some("11.0.3")),
            "ultralytics>=8.0.0,<9.0.0"
        );
        assert_eq!(
            detector_spec(VersionFamily::V10, None),
            "ultralytics>=10.0.0,<11.0.0"
        );
        assert_eq!(
            detector_spec(VersionFamily::V11, None),
            "ultralytics>=11.0.0,<12.0.0"
        );
    }

    #[test]
    fn test_latest_tracks_newest_or_falls_back() {
        assert_eq!(
            detector_spec(VersionFamily::Latest, Some("8.3.40")),
            "ultralytics>=8.3.40"
        );
        assert_eq!(detector_spec(VersionFamily::Latest, None), "8.2.48");
    }

    #[test]
    fn test_family_key_for_latest_uses_leading_numeral() {
        assert_eq!(family_key(VersionFamily::Latest, Some("11.0.3")), "11");
        assert_eq!(family_key(VersionFamily::Latest, Some("10.2.0")), "10");
        assert_eq!(family_key(VersionFamily::Latest, Some("9.1.0")), "8");
        assert_eq!(family_key(VersionFamily::Latest, None), "8");
    }

    #[test]
    fn test_family_key_for_pinned_family_ignores_latest() {
        assert_eq!(family_key(VersionFamily::V10, Some("11.0.3")), "10");
        assert_eq!(family_key(VersionFamily::V8, Some("11.0.3")), "8");
    }

    #[tokio::test]
    async fn test_resolve_returns_exactly_two_entries() {
        let resolver = DetectorResolver::new(feed_with(&["8.3.40", "11.0.1", "11.1.0rc1"]));
        for family in VersionFamily::ALL {
            for gpu in [false, true] {
                let stack = resolver.resolve(family, gpu).await.unwrap();
                assert_eq!(stack.len(), 2, "{family} gpu={gpu}");
                assert!(stack.contains("ultralytics"));
                assert!(stack.contains("torch"));
            }
        }
    }

    #[tokio::test]
    async fn test_resolve_latest_picks_companion_from_latest_major() {
        let resolver = DetectorResolver::new(feed_with(&["8.3.40", "11.0.1", "11.1.0rc1"]));

        let stack = resolver.resolve(VersionFamily::Latest, true).await.unwrap();
        assert_eq!(stack.get("ultralytics"), Some("ultralytics>=11.0.1"));
        assert_eq!(stack.get("torch"), Some("2.5.1+cu124"));
    }

    #[tokio::test]
    async fn test_resolve_empty_feed_uses_fallback() {
        let resolver = DetectorResolver::new(feed_with(&["9.0.0a1", "9.0.0b2"]));

        let stack = resolver.resolve(VersionFamily::Latest, false).await.unwrap();
        assert_eq!(stack.get("ultralytics"), Some("8.2.48"));
        assert_eq!(stack.get("torch"), Some("2.3.1"));
    }

    #[tokio::test]
    async fn test_resolve_propagates_feed_failure() {
        let mut feed = MockReleaseFeedPort::new();
        feed.expect_get_releases().returning(|_| {
            Err(FeedError::Network {
                message: "timed out".to_string(),
            })
        });
        let resolver = DetectorResolver::new(Arc::new(feed));

        let err = resolver.resolve(VersionFamily::V8, false).await.unwrap_err();
        assert!(matches!(err, FeedError::Network { .. }));
    }
}
