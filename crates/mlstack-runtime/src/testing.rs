//! Scripted command runner for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use mlstack_core::{CommandError, CommandOutput, CommandRunnerPort};

/// Answers commands from a table keyed by `program arg arg ...`.
///
/// Unknown commands behave like a missing program.
#[derive(Default)]
pub struct ScriptedRunner {
    outputs: HashMap<String, Result<CommandOutput, CommandError>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, command: &str, output: CommandOutput) -> Self {
        self.outputs.insert(command.to_string(), Ok(output));
        self
    }

    pub fn on_error(mut self, command: &str, error: CommandError) -> Self {
        self.outputs.insert(command.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, program: &str, args: &[&str]) -> Result<CommandOutput, CommandError> {
        let key = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.calls.lock().unwrap().push(key.clone());
        self.outputs.get(&key).cloned().unwrap_or_else(|| {
            Err(CommandError::NotFound {
                program: program.to_string(),
            })
        })
    }
}

impl CommandRunnerPort for ScriptedRunner {
    fn output(&self, program: &str, args: &[&str]) -> Result<CommandOutput, CommandError> {
        self.answer(program, args)
    }

    fn status(&self, program: &str, args: &[&str]) -> Result<Option<i32>, CommandError> {
        self.answer(program, args).map(|output| output.status)
    }
}
