//! Preset store: named stacks loaded from TOML configuration.
//!
//! Every source holds `[stacks.<name>]` tables of `package = "version"`
//! entries. Sources are searched in order and the first one defining the
//! requested name wins.

mod error;
mod source;

use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::debug;

use crate::domain::Stack;

pub use error::PresetError;
pub use source::{BUNDLED_PRESETS, PresetDocument, PresetSource, user_presets_dir};

/// Ordered collection of preset sources.
#[derive(Debug, Clone, Default)]
pub struct PresetStore {
    sources: Vec<PresetSource>,
}

impl PresetStore {
    /// Create a store over explicit sources, searched in order.
    pub const fn new(sources: Vec<PresetSource>) -> Self {
        Self { sources }
    }

    /// Store containing only the presets compiled into the binary.
    pub fn bundled() -> Self {
        Self::new(vec![PresetSource::Bundled])
    }

    /// The standard search order.
    ///
    /// 1. `extra_dirs`, in the order given
    /// 2. the user preset directory and its `custom/` subdirectory
    /// 3. the bundled presets
    pub fn with_default_sources(extra_dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut sources: Vec<PresetSource> =
            extra_dirs.into_iter().map(PresetSource::Directory).collect();
        if let Some(dir) = user_presets_dir() {
            sources.push(PresetSource::Directory(dir.join("custom")));
            sources.push(PresetSource::Directory(dir));
        }
        sources.push(PresetSource::Bundled);
        Self::new(sources)
    }

    pub fn sources(&self) -> &[PresetSource] {
        &self.sources
    }

    /// Load the preset called `name` with every value coerced to a string.
    ///
    /// The returned stack is a fresh copy; callers may mutate it freely.
    pub fn get_preset(&self, name: &str) -> Result<Stack, PresetError> {
        for source in &self.sources {
            for document in source.documents()? {
                if let Some(stack) = document.stack(name) {
                    debug!(preset = name, origin = %document.origin(), "Loaded preset");
                    return Ok(stack);
                }
            }
        }

        Err(PresetError::NotFound {
            name: name.to_string(),
            searched: self.sources.iter().map(ToString::to_string).collect(),
        })
    }

    /// Every known preset name mapped to the source `get_preset` would use.
    pub fn list_presets(&self) -> Result<IndexMap<String, String>, PresetError> {
        let mut presets = IndexMap::new();
        for source in &self.sources {
            for document in source.documents()? {
                for name in document.preset_names() {
                    presets
                        .entry(name.to_string())
                        .or_insert_with(|| document.origin().to_string());
                }
            }
        }
        Ok(presets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, file: &str, body: &str) {
        fs::write(dir.path().join(file), body).unwrap();
    }

    #[test]
    fn test_bundled_presets_load() {
        let store = PresetStore::bundled();
        for name in ["research", "production", "lightweight"] {
            let stack = store.get_preset(name).unwrap();
            assert!(!stack.is_empty(), "{name} should not be empty");
        }
    }

    #[test]
    fn test_research_preset_has_framework_and_nlp() {
        let stack = PresetStore::bundled().get_preset("research").unwrap();
        assert!(stack.contains("tensorflow") || stack.contains("torch"));
        assert!(stack.contains("nltk") || stack.contains("transformers"));
    }

    #[test]
    fn test_values_are_coerced_to_strings() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "numbers.toml",
            "[stacks.numbers]\nnumpy = 2\npython = 3.10\nflag = true\nname = \"1.0.0\"\n",
        );
        let store = PresetStore::new(vec![PresetSource::Directory(dir.path().to_path_buf())]);

        let stack = store.get_preset("numbers").unwrap();
        assert_eq!(stack.get("numpy"), Some("2"));
        assert_eq!(stack.get("python"), Some("3.1"));
        assert_eq!(stack.get("flag"), Some("true"));
        assert_eq!(stack.get("name"), Some("1.0.0"));
    }

    #[test]
    fn test_entry_order_is_preserved() {
        let dir = TempDir::new().unwrap();
        write(&dir, "o.toml", "[stacks.o]\nzeta = \"1\"\nalpha = \"2\"\nmid = \"3\"\n");
        let store = PresetStore::new(vec![PresetSource::Directory(dir.path().to_path_buf())]);

        let stack = store.get_preset("o").unwrap();
        let names: Vec<&str> = stack.names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_first_source_wins() {
        let dir = TempDir::new().unwrap();
        write(&dir, "research.toml", "[stacks.research]\ntorch = \"9.9.9\"\n");
        let store = PresetStore::new(vec![
            PresetSource::Directory(dir.path().to_path_buf()),
            PresetSource::Bundled,
        ]);

        let stack = store.get_preset("research").unwrap();
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.get("torch"), Some("9.9.9"));
    }

    #[test]
    fn test_files_are_searched_in_name_order() {
        let dir = TempDir::new().unwrap();
        write(&dir, "b.toml", "[stacks.shared]\nnltk = \"from-b\"\n");
        write(&dir, "a.toml", "[stacks.shared]\nnltk = \"from-a\"\n");
        write(&dir, "notes.txt", "[stacks.shared]\nnltk = \"ignored\"\n");
        let store = PresetStore::new(vec![PresetSource::Directory(dir.path().to_path_buf())]);

        assert_eq!(store.get_preset("shared").unwrap().get("nltk"), Some("from-a"));
    }

    #[test]
    fn test_missing_directory_is_skipped() {
        let store = PresetStore::new(vec![
            PresetSource::Directory(PathBuf::from("/definitely/not/a/preset/dir")),
            PresetSource::Bundled,
        ]);
        assert!(store.get_preset("lightweight").is_ok());
    }

    #[test]
    fn test_not_found_lists_sources() {
        let store = PresetStore::bundled();
        let err = store.get_preset("my_thesis").unwrap_err();
        assert!(matches!(err, PresetError::NotFound { .. }));
        let msg = err.to_string();
        assert!(msg.contains("my_thesis"));
        assert!(msg.contains("bundled"));
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "broken.toml", "[stacks.broken\n");
        let store = PresetStore::new(vec![PresetSource::Directory(dir.path().to_path_buf())]);

        let err = store.get_preset("broken").unwrap_err();
        assert!(matches!(err, PresetError::Parse { .. }));
    }

    #[test]
    fn test_list_presets_reports_winning_source() {
        let dir = TempDir::new().unwrap();
        write(&dir, "mine.toml", "[stacks.research]\ntorch = \"1\"\n[stacks.my_thesis]\nnltk = \"3\"\n");
        let store = PresetStore::new(vec![
            PresetSource::Directory(dir.path().to_path_buf()),
            PresetSource::Bundled,
        ]);

        let presets = store.list_presets().unwrap();
        assert!(presets["research"].ends_with("mine.toml"));
        assert!(presets["my_thesis"].ends_with("mine.toml"));
        assert_eq!(presets["production"], "bundled:production.toml");
    }
}
