//! `mlstack detect`.

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Print the full diagnostics report as pretty JSON.
#[allow(clippy::unused_async)]
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let report = ctx.composer.diagnostics().detect_all_conflicts();
    println!("{}", report.to_pretty_json()?);
    Ok(())
}
