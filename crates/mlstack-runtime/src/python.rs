//! Python interpreter discovery and virtual environment layout.

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Environment variable overriding the interpreter.
pub const PYTHON_ENV_VAR: &str = "MLSTACK_PYTHON";

/// Interpreter used when nothing else is found.
pub const DEFAULT_PYTHON: &str = "python3";

/// Default virtual environment directory.
pub const DEFAULT_VENV_DIR: &str = ".mlstack-env";

/// Find the interpreter: `MLSTACK_PYTHON`, then `python3` or `python` on
/// `PATH`, else the literal `python3`.
pub fn discover_python() -> String {
    let override_value = env::var(PYTHON_ENV_VAR).ok();
    let python = resolve_python(override_value.as_deref(), |name| {
        which::which(name).ok()
    });
    debug!(%python, "Selected Python interpreter");
    python
}

fn resolve_python(
    override_value: Option<&str>,
    lookup: impl Fn(&str) -> Option<PathBuf>,
) -> String {
    if let Some(value) = override_value.map(str::trim).filter(|v| !v.is_empty()) {
        return value.to_string();
    }
    ["python3", "python"]
        .iter()
        .find_map(|name| lookup(name))
        .map_or_else(
            || DEFAULT_PYTHON.to_string(),
            |path| path.to_string_lossy().into_owned(),
        )
}

/// Interpreter inside a virtual environment.
pub fn venv_python(venv: &Path) -> PathBuf {
    if cfg!(windows) {
        venv.join("Scripts").join("python.exe")
    } else {
        venv.join("bin").join("python")
    }
}
