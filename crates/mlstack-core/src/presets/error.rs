//! Preset loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading presets.
#[derive(Debug, Error)]
pub enum PresetError {
    /// No source defines the requested preset.
    #[error("Preset '{name}' not found (searched: {})", searched.join(", "))]
    NotFound { name: String, searched: Vec<String> },

    /// A preset directory or file could not be read.
    #[error("Failed to read {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    /// A preset file is not valid TOML.
    #[error("Failed to parse {origin}: {reason}")]
    Parse { origin: String, reason: String },
}
