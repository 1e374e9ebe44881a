//! `mlstack fix`: reinstall drifted packages.

use mlstack_core::{DriftEntry, DriftReason, ResolveRequest, Stack, find_drift};
use mlstack_runtime::{InstallOptions, install_stack};
use tracing::info;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::install::print_report;

pub async fn execute(
    ctx: &CliContext,
    request: &ResolveRequest,
    dry_run: bool,
) -> Result<(), CliError> {
    let stack = ctx.composer.resolve_stack(request).await?;
    let drift = find_drift(&stack, ctx.probe.as_ref());

    if drift.is_empty() {
        println!("No drift: all {} packages match.", stack.len());
        return Ok(());
    }

    for entry in &drift {
        println!("{}", describe(entry));
    }

    if dry_run {
        info!(count = drift.len(), "Dry run, nothing installed");
        return Ok(());
    }

    let repair = repair_stack(&drift);
    let options = InstallOptions {
        use_venv: false,
        ..InstallOptions::default()
    };
    let report = install_stack(ctx.runner.as_ref(), &ctx.python, &repair, &options)?;
    print_report(&report);
    Ok(())
}

/// Sub-stack containing only the drifted entries, in resolution order.
pub(crate) fn repair_stack(drift: &[DriftEntry]) -> Stack {
    let mut stack = Stack::new();
    for entry in drift {
        stack.insert(entry.package.clone(), entry.spec.clone());
    }
    stack
}

pub(crate) fn describe(entry: &DriftEntry) -> String {
    match &entry.reason {
        DriftReason::Missing => format!("{}: missing (wants {})", entry.package, entry.token()),
        DriftReason::VersionMismatch { installed } | DriftReason::Unsatisfied { installed } => {
            format!(
                "{}: installed {installed} (wants {})",
                entry.package,
                entry.token()
            )
        }
    }
}
