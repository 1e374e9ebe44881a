//! Command handlers.
//!
//! Each handler has the shape
//! `pub async fn execute(ctx: &CliContext, ...) -> Result<(), CliError>`
//! and only turns arguments into service calls and service results into
//! terminal output.

pub mod detect;
pub mod export;
pub mod fix;
pub mod install;
pub mod presets;
pub mod resolve;
