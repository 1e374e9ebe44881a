//! Sensed accelerator state.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::family::Framework;

/// GPU / CUDA state of the local machine.
///
/// Produced fresh by every probe call. A `None` visibility means the
/// framework could not be loaded at all, `Some(false)` means it loaded but
/// reported no usable device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuProfile {
    /// CUDA version reported by the driver, if any.
    pub cuda_version: Option<String>,
    /// Whether the driver status command ran successfully.
    pub driver_present: bool,
    /// Per-framework GPU visibility.
    pub framework_gpu_visible: IndexMap<Framework, Option<bool>>,
}

impl GpuProfile {
    /// Profile of a machine with no driver and no frameworks installed.
    pub fn cpu_only() -> Self {
        Self {
            cuda_version: None,
            driver_present: false,
            framework_gpu_visible: Framework::ALL.iter().map(|fw| (*fw, None)).collect(),
        }
    }

    /// Set the driver CUDA version (implies a working driver).
    #[must_use]
    pub fn with_cuda(mut self, version: impl Into<String>) -> Self {
        self.cuda_version = Some(version.into());
        self.driver_present = true;
        self
    }

    /// Record GPU visibility for one framework.
    #[must_use]
    pub fn with_visibility(mut self, framework: Framework, visible: Option<bool>) -> Self {
        self.framework_gpu_visible.insert(framework, visible);
        self
    }

    /// GPU visibility for `framework`, `None` when unknown.
    pub fn gpu_visible(&self, framework: Framework) -> Option<bool> {
        self.framework_gpu_visible.get(&framework).copied().flatten()
    }
}

impl Default for GpuProfile {
    fn default() -> Self {
        Self::cpu_only()
    }
}
