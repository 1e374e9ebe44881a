//! Stack installation and post-install import validation.

use std::path::{Path, PathBuf};

use mlstack_core::{CommandRunnerPort, Stack};
use tracing::{info, warn};

use crate::error::InstallError;
use crate::python::{DEFAULT_VENV_DIR, venv_python};

/// Where and how to install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOptions {
    /// Create (if missing) and install into a virtual environment.
    pub use_venv: bool,
    pub venv_path: PathBuf,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            use_venv: false,
            venv_path: PathBuf::from(DEFAULT_VENV_DIR),
        }
    }
}

/// Distribution names whose import name is not derivable mechanically.
const IMPORT_NAMES: [(&str, &str); 8] = [
    ("opencv-python", "cv2"),
    ("opencv-python-headless", "cv2"),
    ("opencv-contrib-python", "cv2"),
    ("opencv-contrib-python-headless", "cv2"),
    ("scikit-learn", "sklearn"),
    ("segment-anything", "segment_anything"),
    ("pillow", "PIL"),
    ("pyyaml", "yaml"),
];

/// Module imported to validate a distribution.
pub fn import_name(distribution: &str) -> String {
    let lowered = distribution.to_ascii_lowercase();
    IMPORT_NAMES
        .iter()
        .find(|(dist, _)| *dist == lowered)
        .map_or_else(|| lowered.replace('-', "_"), |(_, module)| (*module).to_string())
}

/// Outcome of importing one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportCheck {
    pub package: String,
    pub module: String,
    pub ok: bool,
}

/// Per-package import results, in stack order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub checks: Vec<ImportCheck>,
}

impl ValidationReport {
    pub fn failures(&self) -> impl Iterator<Item = &ImportCheck> {
        self.checks.iter().filter(|check| !check.ok)
    }

    pub fn all_ok(&self) -> bool {
        self.checks.iter().all(|check| check.ok)
    }
}

/// Install `stack` with pip and validate the result.
///
/// A failing `pip install` aborts before validation. Validation failures
/// are only reported.
pub fn install_stack(
    runner: &dyn CommandRunnerPort,
    python: &str,
    stack: &Stack,
    options: &InstallOptions,
) -> Result<ValidationReport, InstallError> {
    let python = if options.use_venv {
        ensure_venv(runner, python, &options.venv_path)?
    } else {
        python.to_string()
    };

    let tokens = stack.install_tokens();
    info!(packages = %tokens.join(" "), %python, "Installing");

    let mut args = vec!["-m", "pip", "install"];
    args.extend(tokens.iter().map(String::as_str));

    let code = runner.status(&python, &args)?;
    if code != Some(0) {
        warn!(?code, "pip install failed");
        return Err(InstallError::PipFailed { code });
    }

    Ok(validate_environment(runner, &python, stack.names()))
}

fn ensure_venv(
    runner: &dyn CommandRunnerPort,
    python: &str,
    venv: &Path,
) -> Result<String, InstallError> {
    if !venv.exists() {
        info!(path = %venv.display(), "Creating virtual environment");
        let venv_arg = venv.to_string_lossy();
        let code = runner
            .status(python, &["-m", "venv", venv_arg.as_ref()])
            .map_err(|e| InstallError::Venv {
                path: venv.to_path_buf(),
                reason: e.to_string(),
            })?;
        if code != Some(0) {
            return Err(InstallError::Venv {
                path: venv.to_path_buf(),
                reason: format!("venv exited with {code:?}"),
            });
        }
    }
    Ok(venv_python(venv).to_string_lossy().into_owned())
}

/// Import every package with `python`, warning on failures.
pub fn validate_environment<'a>(
    runner: &dyn CommandRunnerPort,
    python: &str,
    packages: impl IntoIterator<Item = &'a str>,
) -> ValidationReport {
    let checks = packages
        .into_iter()
        .map(|package| {
            let module = import_name(package);
            let statement = format!("import {module}");
            let ok = runner
                .output(python, &["-c", statement.as_str()])
                .is_ok_and(|output| output.success());
            if ok {
                info!(package, %module, "Import OK");
            } else {
                warn!(package, %module, "Failed to import");
            }
            ImportCheck {
                package: package.to_string(),
                module,
                ok,
            }
        })
        .collect();

    ValidationReport { checks }
}
