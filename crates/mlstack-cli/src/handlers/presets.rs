//! `mlstack presets`.

use crate::bootstrap::CliContext;
use crate::error::CliError;

#[allow(clippy::unused_async)]
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let presets = ctx.composer.presets().list_presets()?;
    let width = presets.keys().map(String::len).max().unwrap_or(0);
    for (name, source) in &presets {
        println!("{name:<width$}  {source}");
    }
    Ok(())
}
