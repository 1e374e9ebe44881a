//! Root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;
use mlstack_core::services::DEFAULT_USE_CASE;
use mlstack_core::{FrameworkPreference, ResolveRequest, VersionFamily};

use crate::commands::Commands;

/// Resolve, install and repair machine-learning package stacks.
#[derive(Parser)]
#[command(name = "mlstack")]
#[command(about = "Resolve consistent ML package stacks for your GPU")]
#[command(version)]
pub struct Cli {
    /// Preset (use case) to start from
    #[arg(long, global = true, default_value = DEFAULT_USE_CASE)]
    pub preset: String,

    /// Detection-library version family: latest, v8, v10, v11
    #[arg(long, visible_alias = "yolo", global = true, default_value = "latest")]
    pub family: VersionFamily,

    /// Request accelerator builds for the detector's framework
    #[arg(long, global = true)]
    pub gpu: bool,

    /// Also resolve a single framework: auto, tensorflow, pytorch
    #[arg(long, global = true)]
    pub framework: Option<FrameworkPreference>,

    /// Extra preset directory searched before the defaults (repeatable)
    #[arg(long = "presets-dir", global = true)]
    pub presets_dirs: Vec<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Resolution inputs selected by the global options.
    pub fn request(&self) -> ResolveRequest {
        ResolveRequest {
            use_case: self.preset.clone(),
            family: self.family,
            gpu: self.gpu,
            framework: self.framework,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["mlstack", "resolve"]);
        let request = cli.request();
        assert_eq!(request.use_case, "research");
        assert_eq!(request.family, VersionFamily::Latest);
        assert!(!request.gpu);
        assert_eq!(request.framework, None);
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from([
            "mlstack",
            "resolve",
            "--yolo",
            "v10",
            "--gpu",
            "--framework",
            "pytorch",
            "--preset",
            "production",
            "--presets-dir",
            "/tmp/a",
            "--presets-dir",
            "/tmp/b",
        ]);
        let request = cli.request();
        assert_eq!(request.family, VersionFamily::V10);
        assert!(request.gpu);
        assert_eq!(request.framework, Some(FrameworkPreference::PyTorch));
        assert_eq!(request.use_case, "production");
        assert_eq!(cli.presets_dirs.len(), 2);
    }

    #[test]
    fn test_rejects_unknown_family() {
        assert!(Cli::try_parse_from(["mlstack", "resolve", "--family", "v9"]).is_err());
    }
}
