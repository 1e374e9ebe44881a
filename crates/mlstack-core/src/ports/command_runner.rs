//! Command runner port.
//!
//! Everything that shells out (driver status, `pip`, `python -c`) goes
//! through this trait so probes and the installer can be exercised with a
//! scripted runner in tests.

use thiserror::Error;

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Successful output with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Failed output with the given exit code and stderr.
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            status: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Errors raised when a command cannot be started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The program is not on `PATH`.
    #[error("Command not found: {program}")]
    NotFound { program: String },

    /// Spawning or waiting failed for another reason.
    #[error("Failed to run {program}: {reason}")]
    Io { program: String, reason: String },
}

/// Port for running external programs.
pub trait CommandRunnerPort: Send + Sync {
    /// Run to completion, capturing stdout and stderr.
    fn output(&self, program: &str, args: &[&str]) -> Result<CommandOutput, CommandError>;

    /// Run to completion with inherited stdio, returning the exit code.
    fn status(&self, program: &str, args: &[&str]) -> Result<Option<i32>, CommandError>;
}
