//! Manifest renderers and writers.
//!
//! Every format is derived from a [`Stack`] using the same token rule as the
//! install command: specifiers carrying a comparison operator pass through,
//! bare versions become `name==version`.

mod conda;
mod dockerfile;
mod environment;
mod requirements;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::domain::{Stack, TagParseError};

pub use conda::{CONDA_ENV_NAME, render_conda_env};
pub use dockerfile::{DOCKER_BASE_IMAGE, render_dockerfile};
pub use environment::render_environment_toml;
pub use requirements::{parse_requirements, render_requirements};

/// Errors raised while writing manifests.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to write {}: {reason}", path.display())]
    Io { path: PathBuf, reason: String },
}

/// Exportable manifest formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestFormat {
    Requirements,
    Toml,
    Conda,
    Docker,
}

impl ManifestFormat {
    pub const ALL: [Self; 4] = [Self::Requirements, Self::Toml, Self::Conda, Self::Docker];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Requirements => "requirements",
            Self::Toml => "toml",
            Self::Conda => "conda",
            Self::Docker => "docker",
        }
    }

    /// Conventional file name for this format.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Requirements => "requirements.txt",
            Self::Toml => "environment.toml",
            Self::Conda => "environment.yml",
            Self::Docker => "Dockerfile",
        }
    }

    pub fn render(self, stack: &Stack) -> String {
        match self {
            Self::Requirements => render_requirements(stack),
            Self::Toml => render_environment_toml(stack),
            Self::Conda => render_conda_env(stack),
            Self::Docker => render_dockerfile(stack),
        }
    }

    /// Write this format into `dir`, returning the written path.
    pub fn write(self, stack: &Stack, dir: &Path) -> Result<PathBuf, ManifestError> {
        let path = dir.join(self.file_name());
        write_file(&path, &self.render(stack))?;
        Ok(path)
    }
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ManifestFormat {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "requirements" | "txt" => Ok(Self::Requirements),
            "toml" => Ok(Self::Toml),
            "conda" | "yml" | "yaml" => Ok(Self::Conda),
            "docker" | "dockerfile" => Ok(Self::Docker),
            _ => Err(TagParseError::new(
                "manifest format",
                s,
                "requirements, toml, conda, docker",
            )),
        }
    }
}

/// Write `requirements.txt` to `path`.
pub fn write_requirements(stack: &Stack, path: &Path) -> Result<(), ManifestError> {
    write_file(path, &render_requirements(stack))
}

/// Write `environment.toml` to `path`.
pub fn write_environment_toml(stack: &Stack, path: &Path) -> Result<(), ManifestError> {
    write_file(path, &render_environment_toml(stack))
}

/// Write a Conda `environment.yml` to `path`.
pub fn write_conda_env(stack: &Stack, path: &Path) -> Result<(), ManifestError> {
    write_file(path, &render_conda_env(stack))
}

/// Write a `Dockerfile` to `path`.
pub fn write_dockerfile(stack: &Stack, path: &Path) -> Result<(), ManifestError> {
    write_file(path, &render_dockerfile(stack))
}

/// Write every format into `dir`, creating it when needed.
pub fn write_all(stack: &Stack, dir: &Path) -> Result<Vec<PathBuf>, ManifestError> {
    fs::create_dir_all(dir).map_err(|e| ManifestError::Io {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;
    ManifestFormat::ALL
        .iter()
        .map(|format| format.write(stack, dir))
        .collect()
}

fn write_file(path: &Path, contents: &str) -> Result<(), ManifestError> {
    fs::write(path, contents).map_err(|e| ManifestError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!(path = %path.display(), "Wrote manifest");
    Ok(())
}
