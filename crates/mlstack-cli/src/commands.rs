//! Subcommands.

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};
use mlstack_core::ManifestFormat;
use mlstack_runtime::python::DEFAULT_VENV_DIR;

#[derive(Subcommand)]
pub enum Commands {
    /// Report installed library versions, GPU state and pip conflicts as JSON
    Detect,

    /// Print the pip install command for the resolved stack
    Resolve {
        /// Also print the generated Dockerfile
        #[arg(long)]
        dockerfile: bool,
    },

    /// Resolve, install with pip and validate imports
    Install {
        /// Install into a virtual environment (created when missing)
        #[arg(long)]
        venv: bool,
        /// Virtual environment location
        #[arg(long, default_value = DEFAULT_VENV_DIR)]
        venv_path: PathBuf,
    },

    /// Reinstall only the packages that drifted from the resolved stack
    Fix {
        /// Report drift without installing
        #[arg(long)]
        dry_run: bool,
    },

    /// Write the resolved stack as manifest files
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::All)]
        format: ExportFormat,
        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// List known presets and where each one is loaded from
    Presets,
}

/// `--format` values of `export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Requirements,
    Toml,
    Conda,
    Docker,
    All,
}

impl ExportFormat {
    pub fn manifests(self) -> Vec<ManifestFormat> {
        match self {
            Self::Requirements => vec![ManifestFormat::Requirements],
            Self::Toml => vec![ManifestFormat::Toml],
            Self::Conda => vec![ManifestFormat::Conda],
            Self::Docker => vec![ManifestFormat::Docker],
            Self::All => ManifestFormat::ALL.to_vec(),
        }
    }
}
