//! `mlstack install`.

use std::path::PathBuf;

use mlstack_core::ResolveRequest;
use mlstack_runtime::{InstallOptions, ValidationReport, install_stack};

use crate::bootstrap::CliContext;
use crate::error::CliError;

pub async fn execute(
    ctx: &CliContext,
    request: &ResolveRequest,
    venv: bool,
    venv_path: PathBuf,
) -> Result<(), CliError> {
    let stack = ctx.composer.resolve_stack(request).await?;
    let options = InstallOptions {
        use_venv: venv,
        venv_path,
    };

    println!("Installing: {}", stack.install_tokens().join(" "));
    let report = install_stack(ctx.runner.as_ref(), &ctx.python, &stack, &options)?;
    print_report(&report);
    Ok(())
}

/// One line per import check, then a summary.
pub(crate) fn print_report(report: &ValidationReport) {
    for line in report_lines(report) {
        println!("{line}");
    }
}

pub(crate) fn report_lines(report: &ValidationReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .checks
        .iter()
        .map(|check| {
            let mark = if check.ok { "ok" } else { "FAILED" };
            format!("  {:<24} import {:<20} {mark}", check.package, check.module)
        })
        .collect();

    let failed = report.failures().count();
    if failed == 0 {
        lines.push(format!("All {} packages import cleanly.", report.checks.len()));
    } else {
        lines.push(format!("{failed} of {} packages failed to import.", report.checks.len()));
    }
    lines
}
