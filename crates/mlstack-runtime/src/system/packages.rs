//! Installed package metadata and the consistency checker.

use mlstack_core::{CommandRunnerPort, PipCheck};
use tracing::debug;

/// `Version:` field of `pip show` output.
pub fn parse_pip_show_version(stdout: &str) -> Option<String> {
    stdout.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        let value = value.trim();
        (key.trim().eq_ignore_ascii_case("version") && !value.is_empty())
            .then(|| value.to_string())
    })
}

pub fn installed_version(
    runner: &dyn CommandRunnerPort,
    python: &str,
    package: &str,
) -> Option<String> {
    match runner.output(python, &["-m", "pip", "show", package]) {
        Ok(output) if output.success() => parse_pip_show_version(&output.stdout),
        Ok(_) => None,
        Err(e) => {
            debug!(package, error = %e, "pip show unavailable");
            None
        }
    }
}

pub fn pip_check(runner: &dyn CommandRunnerPort, python: &str) -> PipCheck {
    match runner.output(python, &["-m", "pip", "check"]) {
        Ok(output) => PipCheck {
            conflicts: !output.success(),
            details: output.stdout.trim().to_string(),
        },
        Err(e) => {
            debug!(error = %e, "pip check unavailable");
            PipCheck {
                conflicts: false,
                details: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRunner;
    use mlstack_core::{CommandError, CommandOutput};

    #[test]
    fn test_parse_pip_show() {
        let stdout = "Name: torch\nVersion: 2.3.1+cu121\nSummary: Tensors\n";
        assert_eq!(parse_pip_show_version(stdout).as_deref(), Some("2.3.1+cu121"));
        assert_eq!(parse_pip_show_version("Name: torch\n"), None);
    }

    #[test]
    fn test_installed_version_missing_package() {
        let runner = ScriptedRunner::new().on(
            "python3 -m pip show spacy",
            CommandOutput::failed(1, "WARNING: Package(s) not found: spacy"),
        );
        assert_eq!(installed_version(&runner, "python3", "spacy"), None);
    }

    #[test]
    fn test_pip_check_conflicts() {
        let runner = ScriptedRunner::new().on(
            "python3 -m pip check",
            CommandOutput {
                status: Some(1),
                stdout: "torch 2.1.0 has requirement numpy<2, but you have numpy 2.0.1.\n"
                    .to_string(),
                stderr: String::new(),
            },
        );
        let check = pip_check(&runner, "python3");
        assert!(check.conflicts);
        assert!(check.details.ends_with("numpy 2.0.1."));
    }

    #[test]
    fn test_pip_check_clean() {
        let runner = ScriptedRunner::new().on(
            "python3 -m pip check",
            CommandOutput::ok("No broken requirements found.\n"),
        );
        let check = pip_check(&runner, "python3");
        assert!(!check.conflicts);
        assert_eq!(check.details, "No broken requirements found.");
    }

    #[test]
    fn test_pip_check_spawn_failure_reports_no_conflict() {
        let runner = ScriptedRunner::new().on_error(
            "python3 -m pip check",
            CommandError::Io {
                program: "python3".to_string(),
                reason: "permission denied".to_string(),
            },
        );
        let check = pip_check(&runner, "python3");
        assert!(!check.conflicts);
        assert_eq!(check.details, "Failed to run python3: permission denied");
    }
}
