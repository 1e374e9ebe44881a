//! `mlstack resolve`.

use mlstack_core::ResolveRequest;
use tracing::warn;

use crate::bootstrap::CliContext;
use crate::error::CliError;

pub async fn execute(
    ctx: &CliContext,
    request: &ResolveRequest,
    dockerfile: bool,
) -> Result<(), CliError> {
    let resolved = ctx.composer.resolve_universal_stack(request).await?;

    if resolved.diagnostics.pip.conflicts {
        warn!("pip check reports conflicts in the current environment");
    }

    println!("{}", resolved.install_command);
    if dockerfile {
        println!();
        print!("{}", resolved.dockerfile);
    }
    Ok(())
}
