//! mlstack CLI entry point.

use std::process::ExitCode;

use anyhow::anyhow;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mlstack_cli::handlers;
use mlstack_cli::{Cli, CliConfig, CliError, Commands, bootstrap};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before parsing so env-backed settings see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let request = cli.request();
    let ctx = bootstrap(CliConfig::from_env(cli.presets_dirs))?;

    match cli.command {
        Commands::Detect => handlers::detect::execute(&ctx).await,
        Commands::Resolve { dockerfile } => {
            handlers::resolve::execute(&ctx, &request, dockerfile).await
        }
        Commands::Install { venv, venv_path } => {
            handlers::install::execute(&ctx, &request, venv, venv_path).await
        }
        Commands::Fix { dry_run } => handlers::fix::execute(&ctx, &request, dry_run).await,
        Commands::Export { format, output } => {
            handlers::export::execute(&ctx, &request, &format.manifests(), &output).await
        }
        Commands::Presets => handlers::presets::execute(&ctx).await,
    }
}
