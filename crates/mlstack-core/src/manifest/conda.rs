//! Conda `environment.yml` rendering.

use std::fmt::Write as _;

use crate::domain::Stack;

/// Environment name written into `environment.yml`.
pub const CONDA_ENV_NAME: &str = "mlstack-env";

/// Python and pip from Conda, everything else through a nested `pip:` list.
pub fn render_conda_env(stack: &Stack) -> String {
    let mut out = format!("name: {CONDA_ENV_NAME}\ndependencies:\n  - python\n  - pip\n  - pip:\n");
    for token in stack.install_tokens() {
        let _ = writeln!(out, "    - {token}");
    }
    out
}
