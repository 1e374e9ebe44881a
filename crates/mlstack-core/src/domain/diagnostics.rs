//! Diagnostics report types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::gpu::GpuProfile;

/// Library domains covered by the conflict report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictDomain {
    Cnn,
    Nlp,
    Vision,
}

impl ConflictDomain {
    pub const ALL: [Self; 3] = [Self::Cnn, Self::Nlp, Self::Vision];

    /// Distribution names inspected for this domain.
    pub const fn libraries(self) -> &'static [&'static str] {
        match self {
            Self::Cnn => &["tensorflow", "torch", "ultralytics"],
            Self::Nlp => &["nltk", "transformers", "spacy"],
            Self::Vision => &["opencv-python", "albumentations", "segment-anything"],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cnn => "cnn",
            Self::Nlp => "nlp",
            Self::Vision => "vision",
        }
    }
}

/// Result of one run of the package manager's consistency checker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipCheck {
    /// Whether the checker exited non-zero. A checker that cannot be started
    /// reports no conflict.
    pub conflicts: bool,
    /// Raw checker output, trimmed.
    pub details: String,
}

/// Installed versions and checker result for one domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainReport {
    /// Installed version per library, `None` when not installed.
    pub libraries: IndexMap<String, Option<String>>,
    pub pip_conflicts: bool,
    pub pip_output: String,
}

impl DomainReport {
    /// Libraries that are not installed.
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.libraries
            .iter()
            .filter(|(_, version)| version.is_none())
            .map(|(name, _)| name.as_str())
    }
}

/// Combined environment report across every domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsReport {
    pub cnn: DomainReport,
    pub nlp: DomainReport,
    pub vision: DomainReport,
    pub gpu: GpuProfile,
    pub pip: PipCheck,
}

impl DiagnosticsReport {
    pub const fn domain(&self, domain: ConflictDomain) -> &DomainReport {
        match domain {
            ConflictDomain::Cnn => &self.cnn,
            ConflictDomain::Nlp => &self.nlp,
            ConflictDomain::Vision => &self.vision,
        }
    }

    /// Pretty JSON rendering used by the `detect` command.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
