//! Container build script rendering.

use crate::domain::Stack;

pub const DOCKER_BASE_IMAGE: &str = "python:3.11-slim";

/// Minimal Dockerfile installing the stack with pip.
///
/// Tokens are shell-quoted so constraint operators survive `/bin/sh`.
pub fn render_dockerfile(stack: &Stack) -> String {
    let packages = shell_words::join(stack.install_tokens());
    format!(
        "FROM {DOCKER_BASE_IMAGE}\n\n\
         WORKDIR /app\n\n\
         RUN pip install --upgrade pip \\\n    && pip install {packages}\n\n\
         CMD [\"python\"]\n"
    )
}
