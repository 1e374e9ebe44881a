//! System probe port for GPU and installed-package detection.
//!
//! This port abstracts active system probing (command execution, framework
//! imports) from the core domain. Implementations live in adapters
//! (e.g., mlstack-runtime).
//!
//! # Design Notes
//!
//! - Core owns the trait and types (pure)
//! - Runtime owns the implementation (active probing via a command runner)
//! - No method returns an error: every failure degrades to `None`/`false`

use crate::domain::{GpuProfile, PipCheck};

/// Port for probing the local machine and its Python environment.
pub trait SystemProbePort: Send + Sync {
    /// Detect driver, CUDA version and per-framework GPU visibility.
    fn detect_gpu_status(&self) -> GpuProfile;

    /// Installed version of a distribution, `None` when not installed.
    fn installed_version(&self, package: &str) -> Option<String>;

    /// Run the package manager's consistency checker once.
    fn pip_check(&self) -> PipCheck;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Framework;
    use std::collections::HashMap;

    /// Mock implementation for testing.
    struct MockSystemProbe {
        gpu: GpuProfile,
        installed: HashMap<String, String>,
    }

    impl SystemProbePort for MockSystemProbe {
        fn detect_gpu_status(&self) -> GpuProfile {
            self.gpu.clone()
        }

        fn installed_version(&self, package: &str) -> Option<String> {
            self.installed.get(package).cloned()
        }

        fn pip_check(&self) -> PipCheck {
            PipCheck::default()
        }
    }

    #[test]
    fn test_mock_probe() {
        let probe = MockSystemProbe {
            gpu: GpuProfile::cpu_only().with_visibility(Framework::PyTorch, Some(false)),
            installed: HashMap::from([("nltk".to_string(), "3.8.1".to_string())]),
        };

        assert_eq!(probe.installed_version("nltk").as_deref(), Some("3.8.1"));
        assert!(probe.installed_version("spacy").is_none());
        assert_eq!(
            probe.detect_gpu_status().gpu_visible(Framework::PyTorch),
            Some(false)
        );
        assert!(!probe.pip_check().conflicts);
    }
}
