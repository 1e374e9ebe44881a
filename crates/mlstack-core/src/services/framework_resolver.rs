//! Single-framework selection from the detected CUDA runtime.

use std::sync::Arc;

use tracing::debug;

use crate::compat::{best_framework_build, runtime_table};
use crate::domain::{Framework, FrameworkPreference, GpuProfile, Stack};
use crate::ports::SystemProbePort;

/// Picks one framework build compatible with the local accelerator.
pub struct FrameworkResolver {
    probe: Arc<dyn SystemProbePort>,
}

impl FrameworkResolver {
    pub fn new(probe: Arc<dyn SystemProbePort>) -> Self {
        Self { probe }
    }

    /// Probe the machine and resolve a one-entry framework stack.
    pub fn resolve(&self, prefer: FrameworkPreference) -> Stack {
        let gpu = self.probe.detect_gpu_status();
        resolve_for_profile(prefer, &gpu)
    }
}

/// Framework chosen for a preference.
///
/// `auto` only consults PyTorch GPU visibility; TensorFlow visibility is
/// never checked and TensorFlow is the default.
pub fn select_framework(prefer: FrameworkPreference, gpu: &GpuProfile) -> Framework {
    match prefer {
        FrameworkPreference::TensorFlow => Framework::TensorFlow,
        FrameworkPreference::PyTorch => Framework::PyTorch,
        FrameworkPreference::Auto => {
            if gpu.gpu_visible(Framework::PyTorch) == Some(true) {
                Framework::PyTorch
            } else {
                Framework::TensorFlow
            }
        }
    }
}

/// Resolve against an already sensed profile.
pub fn resolve_for_profile(prefer: FrameworkPreference, gpu: &GpuProfile) -> Stack {
    let framework = select_framework(prefer, gpu);
    let build = best_framework_build(gpu.cuda_version.as_deref(), runtime_table(framework));

    debug!(
        %prefer,
        %framework,
        cuda = ?gpu.cuda_version,
        build = %build,
        "Resolved framework build"
    );

    let mut stack = Stack::new();
    stack.insert(framework.package_name(), build);
    stack
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PipCheck;

    struct FixedProbe(GpuProfile);

    impl SystemProbePort for FixedProbe {
        fn detect_gpu_status(&self) -> GpuProfile {
            self.0.clone()
        }

        fn installed_version(&self, _package: &str) -> Option<String> {
            None
        }

        fn pip_check(&self) -> PipCheck {
            PipCheck::default()
        }
    }

    #[test]
    fn test_explicit_pytorch_without_cuda_is_cpu_build() {
        let stack = resolve_for_profile(FrameworkPreference::PyTorch, &GpuProfile::cpu_only());
        assert_eq!(stack.get("torch"), Some("2.1.0"));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_explicit_tensorflow_with_cuda() {
        let gpu = GpuProfile::cpu_only().with_cuda("12.3");
        let stack = resolve_for_profile(FrameworkPreference::TensorFlow, &gpu);
        // "12.3" shares the "12." prefix with the first row.
        assert_eq!(stack.get("tensorflow"), Some("2.15.0"));
    }

    #[test]
    fn test_unmatched_cuda_keeps_build_suffix() {
        let gpu = GpuProfile::cpu_only().with_cuda("11.8");
        let stack = resolve_for_profile(FrameworkPreference::PyTorch, &gpu);
        assert_eq!(stack.get("torch"), Some("2.1.0+cu121"));
    }

    #[test]
    fn test_auto_prefers_visible_torch_gpu() {
        let gpu = GpuProfile::cpu_only()
            .with_cuda("12.1")
            .with_visibility(Framework::PyTorch, Some(true));
        assert_eq!(
            select_framework(FrameworkPreference::Auto, &gpu),
            Framework::PyTorch
        );
    }

    #[test]
    fn test_auto_ignores_tensorflow_visibility() {
        let gpu = GpuProfile::cpu_only()
            .with_visibility(Framework::TensorFlow, Some(true))
            .with_visibility(Framework::PyTorch, Some(false));
        assert_eq!(
            select_framework(FrameworkPreference::Auto, &gpu),
            Framework::TensorFlow
        );

        let unknown = GpuProfile::cpu_only();
        assert_eq!(
            select_framework(FrameworkPreference::Auto, &unknown),
            Framework::TensorFlow
        );
    }

    #[test]
    fn test_resolve_uses_probe() {
        let probe = FixedProbe(
            GpuProfile::cpu_only()
                .with_cuda("12.4")
                .with_visibility(Framework::PyTorch, Some(true)),
        );
        let resolver = FrameworkResolver::new(Arc::new(probe));

        let stack = resolver.resolve(FrameworkPreference::Auto);
        assert_eq!(stack.get("torch"), Some("2.1.0+cu121"));
    }
}
