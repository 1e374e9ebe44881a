//! `mlstack export`.

use std::path::{Path, PathBuf};

use mlstack_core::{ManifestError, ManifestFormat, ResolveRequest, Stack};

use crate::bootstrap::CliContext;
use crate::error::CliError;

pub async fn execute(
    ctx: &CliContext,
    request: &ResolveRequest,
    formats: &[ManifestFormat],
    output: &Path,
) -> Result<(), CliError> {
    let stack = ctx.composer.resolve_stack(request).await?;
    for path in write_manifests(&stack, formats, output)? {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

pub(crate) fn write_manifests(
    stack: &Stack,
    formats: &[ManifestFormat],
    output: &Path,
) -> Result<Vec<PathBuf>, ManifestError> {
    std::fs::create_dir_all(output).map_err(|e| ManifestError::Io {
        path: output.to_path_buf(),
        reason: e.to_string(),
    })?;
    formats
        .iter()
        .map(|format| format.write(stack, output))
        .collect()
}
