//! `CommandRunnerPort` backed by `std::process::Command`.
//!
//! Local subprocesses run without a timeout.

use std::io;
use std::process::Command;

use mlstack_core::{CommandError, CommandOutput, CommandRunnerPort};
use tracing::debug;

/// Runs real programs on the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub const fn new() -> Self {
        Self
    }
}

fn map_io_error(program: &str, err: &io::Error) -> CommandError {
    if err.kind() == io::ErrorKind::NotFound {
        CommandError::NotFound {
            program: program.to_string(),
        }
    } else {
        CommandError::Io {
            program: program.to_string(),
            reason: err.to_string(),
        }
    }
}

impl CommandRunnerPort for SystemCommandRunner {
    fn output(&self, program: &str, args: &[&str]) -> Result<CommandOutput, CommandError> {
        debug!(program, ?args, "Running command");
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| map_io_error(program, &e))?;

        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn status(&self, program: &str, args: &[&str]) -> Result<Option<i32>, CommandError> {
        debug!(program, ?args, "Running command with inherited stdio");
        Command::new(program)
            .args(args)
            .status()
            .map(|status| status.code())
            .map_err(|e| map_io_error(program, &e))
    }
}
