//! Preset sources and parsed preset documents.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::PresetError;
use crate::domain::{Stack, qualify_specifier};

/// Preset files compiled into the binary.
pub const BUNDLED_PRESETS: [(&str, &str); 3] = [
    ("lightweight.toml", include_str!("bundled/lightweight.toml")),
    ("production.toml", include_str!("bundled/production.toml")),
    ("research.toml", include_str!("bundled/research.toml")),
];

/// `<config_dir>/mlstack/presets`, when the platform has a config dir.
pub fn user_presets_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mlstack").join("presets"))
}

/// Where preset documents come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetSource {
    /// Every `*.toml` file directly inside a directory, in file-name order.
    Directory(PathBuf),
    /// The presets shipped with the binary.
    Bundled,
}

impl fmt::Display for PresetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory(path) => write!(f, "{}", path.display()),
            Self::Bundled => f.write_str("bundled"),
        }
    }
}

impl PresetSource {
    /// Parse every document of this source.
    ///
    /// A directory that does not exist yields no documents.
    pub fn documents(&self) -> Result<Vec<PresetDocument>, PresetError> {
        match self {
            Self::Bundled => BUNDLED_PRESETS
                .iter()
                .map(|(file, body)| PresetDocument::parse(format!("bundled:{file}"), body))
                .collect(),
            Self::Directory(dir) => {
                if !dir.is_dir() {
                    debug!(dir = %dir.display(), "Preset directory does not exist, skipping");
                    return Ok(Vec::new());
                }
                toml_files(dir)?
                    .into_iter()
                    .map(|path| {
                        let body = fs::read_to_string(&path).map_err(|e| PresetError::Read {
                            path: path.clone(),
                            reason: e.to_string(),
                        })?;
                        PresetDocument::parse(path.display().to_string(), &body)
                    })
                    .collect()
            }
        }
    }
}

fn toml_files(dir: &Path) -> Result<Vec<PathBuf>, PresetError> {
    let entries = fs::read_dir(dir).map_err(|e| PresetError::Read {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    files.sort();
    Ok(files)
}

/// One parsed preset file.
#[derive(Debug, Clone)]
pub struct PresetDocument {
    origin: String,
    table: toml::Table,
}

impl PresetDocument {
    /// Parse a document; `origin` identifies it in errors and listings.
    pub fn parse(origin: impl Into<String>, body: &str) -> Result<Self, PresetError> {
        let origin = origin.into();
        let table = body.parse::<toml::Table>().map_err(|e| PresetError::Parse {
            origin: origin.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { origin, table })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn stacks(&self) -> Option<&toml::Table> {
        self.table.get("stacks").and_then(toml::Value::as_table)
    }

    /// Names of the `[stacks.*]` tables in this document.
    pub fn preset_names(&self) -> impl Iterator<Item = &str> {
        self.stacks()
            .into_iter()
            .flat_map(|stacks| stacks.iter())
            .filter(|(_, value)| value.is_table())
            .map(|(name, _)| name.as_str())
    }

    /// The preset called `name`, with values coerced to strings.
    ///
    /// Operator-only constraints (`numpy = ">=1.26"`) are stored with the
    /// package name prepended.
    pub fn stack(&self, name: &str) -> Option<Stack> {
        let entries = self.stacks()?.get(name)?.as_table()?;
        Some(
            entries
                .iter()
                .map(|(package, value)| {
                    let spec = qualify_specifier(package, &coerce_to_string(value));
                    (package.clone(), spec)
                })
                .collect(),
        )
    }
}

fn coerce_to_string(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_without_stacks_has_no_presets() {
        let doc = PresetDocument::parse("inline", "[tool]\nname = \"x\"\n").unwrap();
        assert_eq!(doc.preset_names().count(), 0);
        assert!(doc.stack("research").is_none());
    }

    #[test]
    fn test_non_table_stack_entries_are_ignored() {
        let doc = PresetDocument::parse("inline", "[stacks]\nresearch = \"oops\"\n").unwrap();
        assert_eq!(doc.preset_names().count(), 0);
        assert!(doc.stack("research").is_none());
    }

    #[test]
    fn test_operator_only_values_are_named() {
        let doc = PresetDocument::parse(
            "inline",
            "[stacks.p]\nnumpy = \">=1.26\"\nultralytics = \"ultralytics>=8.3.0\"\ntorch = \"2.1.0\"\n",
        )
        .unwrap();
        let stack = doc.stack("p").unwrap();
        assert_eq!(stack.get("numpy"), Some("numpy>=1.26"));
        assert_eq!(stack.get("ultralytics"), Some("ultralytics>=8.3.0"));
        assert_eq!(stack.get("torch"), Some("2.1.0"));
        assert_eq!(
            stack.install_command(),
            "pip install numpy>=1.26 ultralytics>=8.3.0 torch==2.1.0"
        );
    }

    #[test]
    fn test_operator_only_values_survive_requirements_round_trip() {
        use crate::manifest::{parse_requirements, render_requirements};

        let doc = PresetDocument::parse("inline", "[stacks.p]\nnumpy = \">=1.26\"\n").unwrap();
        let stack = doc.stack("p").unwrap();
        assert_eq!(parse_requirements(&render_requirements(&stack)), stack);
    }

    #[test]
    fn test_bundled_source_display() {
        assert_eq!(PresetSource::Bundled.to_string(), "bundled");
        assert_eq!(
            PresetSource::Directory(PathBuf::from("/etc/mlstack")).to_string(),
            "/etc/mlstack"
        );
    }
}
