#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod compat;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod ports;
pub mod presets;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    ConflictDomain, DiagnosticsReport, DomainReport, Framework, FrameworkPreference, GpuProfile,
    PipCheck, ReleaseList, Stack, StableReleaseList, VersionFamily,
};
pub use error::ResolveError;
pub use manifest::{ManifestError, ManifestFormat};
pub use ports::{
    CommandError, CommandOutput, CommandRunnerPort, FeedError, FeedResult, ReleaseFeedPort,
    SystemProbePort,
};
pub use presets::{PresetError, PresetSource, PresetStore};
pub use services::{
    DetectorResolver, DiagnosticsService, DriftEntry, DriftReason, FrameworkResolver,
    ResolveRequest, ResolvedStack, StackComposer, find_drift,
};
