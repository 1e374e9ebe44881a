//! Diagnostics aggregation across library domains.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{ConflictDomain, DiagnosticsReport, DomainReport, GpuProfile};
use crate::ports::SystemProbePort;

/// Combines probe results into a conflict report.
///
/// Never fails: the probe degrades every failure to `None`/`false`.
pub struct DiagnosticsService {
    probe: Arc<dyn SystemProbePort>,
}

impl DiagnosticsService {
    pub fn new(probe: Arc<dyn SystemProbePort>) -> Self {
        Self { probe }
    }

    /// Installed versions of one domain's libraries plus one checker run.
    pub fn detect_domain_conflicts(&self, domain: ConflictDomain) -> DomainReport {
        let libraries = domain
            .libraries()
            .iter()
            .map(|name| ((*name).to_string(), self.probe.installed_version(name)))
            .collect();
        let check = self.probe.pip_check();

        debug!(domain = domain.as_str(), conflicts = check.conflicts, "Checked domain");

        DomainReport {
            libraries,
            pip_conflicts: check.conflicts,
            pip_output: check.details,
        }
    }

    pub fn detect_cnn_conflicts(&self) -> DomainReport {
        self.detect_domain_conflicts(ConflictDomain::Cnn)
    }

    pub fn detect_nlp_conflicts(&self) -> DomainReport {
        self.detect_domain_conflicts(ConflictDomain::Nlp)
    }

    pub fn detect_vision_conflicts(&self) -> DomainReport {
        self.detect_domain_conflicts(ConflictDomain::Vision)
    }

    pub fn detect_gpu_status(&self) -> GpuProfile {
        self.probe.detect_gpu_status()
    }

    /// Full report: every domain, the GPU profile and a global checker run.
    pub fn detect_all_conflicts(&self) -> DiagnosticsReport {
        DiagnosticsReport {
            cnn: self.detect_cnn_conflicts(),
            nlp: self.detect_nlp_conflicts(),
            vision: self.detect_vision_conflicts(),
            gpu: self.detect_gpu_status(),
            pip: self.probe.pip_check(),
        }
    }
}
