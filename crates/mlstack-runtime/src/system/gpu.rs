//! Driver and framework GPU detection.

use mlstack_core::{CommandRunnerPort, Framework};
use tracing::debug;

/// Driver status command.
pub const DRIVER_STATUS_COMMAND: &str = "nvidia-smi";

/// Python snippet printing `True` / `False` for a framework's GPU access.
pub const fn visibility_snippet(framework: Framework) -> &'static str {
    match framework {
        Framework::TensorFlow => {
            "import tensorflow as tf; print(bool(tf.config.list_physical_devices('GPU')))"
        }
        Framework::PyTorch => "import torch; print(bool(torch.cuda.is_available()))",
    }
}

/// CUDA version from `nvidia-smi` output.
///
/// Takes the first line mentioning `CUDA Version` and trims spaces, colons
/// and table borders from what follows.
pub fn parse_cuda_version(stdout: &str) -> Option<String> {
    let line = stdout.lines().find(|line| line.contains("CUDA Version"))?;
    let (_, rest) = line.rsplit_once("CUDA Version")?;
    let version = rest.trim_matches(|c: char| c.is_whitespace() || c == ':' || c == '|');
    (!version.is_empty()).then(|| version.to_string())
}

/// `(driver_present, cuda_version)`.
pub fn detect_driver(runner: &dyn CommandRunnerPort) -> (bool, Option<String>) {
    match runner.output(DRIVER_STATUS_COMMAND, &[]) {
        Ok(output) if output.success() => (true, parse_cuda_version(&output.stdout)),
        Ok(output) => {
            debug!(status = ?output.status, "Driver status command failed");
            (false, None)
        }
        Err(e) => {
            debug!(error = %e, "Driver status command unavailable");
            (false, None)
        }
    }
}

/// `None` when the framework cannot be imported or prints something else.
pub fn framework_gpu_visible(
    runner: &dyn CommandRunnerPort,
    python: &str,
    framework: Framework,
) -> Option<bool> {
    let output = runner
        .output(python, &["-c", visibility_snippet(framework)])
        .inspect_err(|e| debug!(%framework, error = %e, "Interpreter unavailable"))
        .ok()?;

    if !output.success() {
        debug!(%framework, "Framework import failed");
        return None;
    }
    match output.stdout.lines().last().map(str::trim) {
        Some("True") => Some(true),
        Some("False") => Some(false),
        _ => None,
    }
}
