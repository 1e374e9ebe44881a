//! Installer errors.

use std::path::PathBuf;

use mlstack_core::CommandError;
use thiserror::Error;

/// Errors that abort an install.
///
/// Import validation never produces one; it only warns.
#[derive(Debug, Error)]
pub enum InstallError {
    /// `pip install` exited non-zero (`None` when killed by a signal).
    #[error("Installation failed (pip exit code {}), see pip output above", code.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    PipFailed { code: Option<i32> },

    /// The interpreter could not be started.
    #[error(transparent)]
    Spawn(#[from] CommandError),

    /// Virtual environment creation failed.
    #[error("Failed to create virtual environment at {}: {reason}", path.display())]
    Venv { path: PathBuf, reason: String },
}
