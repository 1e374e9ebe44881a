//! Domain types shared by every layer.
//!
//! Everything here is recomputed per invocation; nothing is persisted.

mod diagnostics;
mod family;
mod gpu;
mod release;
mod stack;

pub use diagnostics::{ConflictDomain, DiagnosticsReport, DomainReport, PipCheck};
pub use family::{Framework, FrameworkPreference, TagParseError, VersionFamily};
pub use gpu::GpuProfile;
pub use release::{
    PRERELEASE_MARKERS, ReleaseList, StableReleaseList, compare_versions, is_prerelease,
    version_key,
};
pub use stack::{
    COMPARISON_OPERATORS, PIP_INSTALL_PREFIX, Stack, has_comparison_operator, qualify_specifier,
    requirement_token,
};
