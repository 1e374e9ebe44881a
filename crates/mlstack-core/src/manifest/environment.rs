//! `environment.toml` rendering.

use serde::Serialize;
use tracing::warn;

use crate::domain::Stack;

#[derive(Serialize)]
struct EnvironmentFile<'a> {
    packages: &'a Stack,
}

/// A `[packages]` table of raw specifiers.
pub fn render_environment_toml(stack: &Stack) -> String {
    toml::to_string(&EnvironmentFile { packages: stack }).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to serialise environment.toml");
        String::from("[packages]\n")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_packages_table() {
        let stack: Stack = [("tensorflow", "2.17.0"), ("ultralytics", "ultralytics>=8.3.40")]
            .into_iter()
            .collect();
        let rendered = render_environment_toml(&stack);

        let parsed: toml::Table = rendered.parse().unwrap();
        let packages = parsed["packages"].as_table().unwrap();
        assert_eq!(packages["tensorflow"].as_str(), Some("2.17.0"));
        assert_eq!(packages["ultralytics"].as_str(), Some("ultralytics>=8.3.40"));
        assert!(rendered.find("tensorflow") < rendered.find("ultralytics"));
    }
}
