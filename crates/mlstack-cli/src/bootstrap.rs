//! CLI bootstrap: composition root.
//!
//! Wires the preset store, package index client and system probe into a
//! [`StackComposer`]. No other module constructs adapters.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use mlstack_core::{CommandRunnerPort, PresetStore, StackComposer, SystemProbePort};
use mlstack_pypi::{DefaultPypiClient, PypiClientConfig};
use mlstack_runtime::python::discover_python;
use mlstack_runtime::{DefaultSystemProbe, SystemCommandRunner};
use tracing::debug;

use crate::error::CliError;

/// Environment variable holding extra preset directories (path list).
pub const PRESETS_DIR_ENV_VAR: &str = "MLSTACK_PRESETS_DIR";

/// Environment variable overriding the package index base URL.
pub const INDEX_URL_ENV_VAR: &str = "MLSTACK_INDEX_URL";

/// Configuration for CLI bootstrap.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Preset directories searched before the user config dir.
    pub presets_dirs: Vec<PathBuf>,
    /// Package index override; `None` uses the public index.
    pub index_url: Option<String>,
    /// Interpreter used for probes and installs.
    pub python: String,
}

impl CliConfig {
    /// Build from command-line directories plus the environment.
    ///
    /// Directories given on the command line come first.
    pub fn from_env(cli_dirs: Vec<PathBuf>) -> Self {
        let mut presets_dirs = cli_dirs;
        if let Some(paths) = env::var_os(PRESETS_DIR_ENV_VAR) {
            presets_dirs.extend(env::split_paths(&paths).filter(|p| !p.as_os_str().is_empty()));
        }

        let index_url = env::var(INDEX_URL_ENV_VAR)
            .ok()
            .filter(|url| !url.trim().is_empty());

        Self {
            presets_dirs,
            index_url,
            python: discover_python(),
        }
    }
}

/// Everything a handler needs.
pub struct CliContext {
    pub composer: StackComposer,
    pub probe: Arc<dyn SystemProbePort>,
    pub runner: Arc<dyn CommandRunnerPort>,
    pub python: String,
}

/// Build the CLI context from configuration.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    debug!(python = %config.python, dirs = ?config.presets_dirs, "Bootstrapping");

    let runner: Arc<dyn CommandRunnerPort> = Arc::new(SystemCommandRunner::new());
    let probe: Arc<dyn SystemProbePort> =
        Arc::new(DefaultSystemProbe::new(Arc::clone(&runner), config.python.clone()));

    let feed_config = PypiClientConfig::new().with_optional_base_url(config.index_url);
    let feed = DefaultPypiClient::new(&feed_config).map_err(|e| CliError::Config(e.to_string()))?;

    let presets = PresetStore::with_default_sources(config.presets_dirs);
    let composer = StackComposer::new(presets, Arc::new(feed), Arc::clone(&probe));

    Ok(CliContext {
        composer,
        probe,
        runner,
        python: config.python,
    })
}
