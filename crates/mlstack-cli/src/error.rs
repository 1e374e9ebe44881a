//! CLI error type and exit codes.

use mlstack_core::{ManifestError, PresetError, ResolveError};
use mlstack_runtime::InstallError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Preset or client configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The package index could not be used.
    #[error("{0}")]
    Unavailable(String),

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(String),

    /// A program could not be started.
    #[error("Process error: {0}")]
    Process(String),

    /// Anything else, including a failing `pip install`.
    #[error("{0}")]
    General(String),
}

impl CliError {
    /// Map error to a sysexits-style exit code.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::General(_) => 1,
            Self::Unavailable(_) => 69, // EX_UNAVAILABLE
            Self::Process(_) => 71, // EX_OSERR
            Self::Io(_) => 74, // EX_IOERR
            Self::Config(_) => 78, // EX_CONFIG
        }
    }
}

impl From<PresetError> for CliError {
    fn from(err: PresetError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<ResolveError> for CliError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Preset(e) => e.into(),
            ResolveError::Feed(_) => Self::Unavailable(err.to_string()),
        }
    }
}

impl From<InstallError> for CliError {
    fn from(err: InstallError) -> Self {
        match err {
            InstallError::PipFailed { .. } => Self::General(err.to_string()),
            InstallError::Spawn(_) | InstallError::Venv { .. } => Self::Process(err.to_string()),
        }
    }
}

impl From<ManifestError> for CliError {
    fn from(err: ManifestError) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::General(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlstack_core::FeedError;

    #[test]
    fn test_exit_codes() {
        let not_found: CliError = PresetError::NotFound {
            name: "my_thesis".to_string(),
            searched: vec!["bundled".to_string()],
        }
        .into();
        assert_eq!(not_found.exit_code(), 78);

        let offline: CliError = ResolveError::Feed(FeedError::Network {
            message: "dns".to_string(),
        })
        .into();
        assert_eq!(offline.exit_code(), 69);

        let pip: CliError = InstallError::PipFailed { code: Some(1) }.into();
        assert_eq!(pip.exit_code(), 1);
    }

    #[test]
    fn test_preset_message_is_kept() {
        let err: CliError = ResolveError::Preset(PresetError::NotFound {
            name: "my_thesis".to_string(),
            searched: vec!["bundled".to_string()],
        })
        .into();
        assert!(err.to_string().contains("my_thesis"));
    }
}
