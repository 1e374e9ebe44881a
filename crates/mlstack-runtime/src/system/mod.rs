//! System probe implementation.
//!
//! `DefaultSystemProbe` implements `SystemProbePort` from mlstack-core by
//! running external programs through a `CommandRunnerPort`. Nothing here
//! returns an error; every failure degrades to `None` / `false`.

mod gpu;
mod packages;

use std::sync::Arc;

use mlstack_core::{CommandRunnerPort, Framework, GpuProfile, PipCheck, SystemProbePort};

pub use gpu::{DRIVER_STATUS_COMMAND, parse_cuda_version, visibility_snippet};
pub use packages::parse_pip_show_version;

/// Default implementation of `SystemProbePort`.
///
/// Constructed at the composition root and shared with the services that
/// need it.
pub struct DefaultSystemProbe {
    runner: Arc<dyn CommandRunnerPort>,
    python: String,
}

impl DefaultSystemProbe {
    /// Probe the environment of `python` using `runner`.
    pub fn new(runner: Arc<dyn CommandRunnerPort>, python: impl Into<String>) -> Self {
        Self {
            runner,
            python: python.into(),
        }
    }

    pub fn python(&self) -> &str {
        &self.python
    }
}

impl SystemProbePort for DefaultSystemProbe {
    fn detect_gpu_status(&self) -> GpuProfile {
        let (driver_present, cuda_version) = gpu::detect_driver(self.runner.as_ref());
        let framework_gpu_visible = Framework::ALL
            .iter()
            .map(|fw| {
                (
                    *fw,
                    gpu::framework_gpu_visible(self.runner.as_ref(), &self.python, *fw),
                )
            })
            .collect();

        GpuProfile {
            cuda_version,
            driver_present,
            framework_gpu_visible,
        }
    }

    fn installed_version(&self, package: &str) -> Option<String> {
        packages::installed_version(self.runner.as_ref(), &self.python, package)
    }

    fn pip_check(&self) -> PipCheck {
        packages::pip_check(self.runner.as_ref(), &self.python)
    }
}
