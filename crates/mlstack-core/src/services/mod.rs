//! Resolution services.
//!
//! Services orchestrate ports and domain logic; they know nothing about
//! concrete adapters.

mod composer;
mod detector_resolver;
mod diagnostics;
mod drift;
mod framework_resolver;

pub use composer::{DEFAULT_USE_CASE, ResolveRequest, ResolvedStack, StackComposer};
pub use detector_resolver::{DetectorResolver, detector_spec, family_key};
pub use diagnostics::DiagnosticsService;
pub use drift::{DriftEntry, DriftReason, find_drift, satisfies};
pub use framework_resolver::{FrameworkResolver, resolve_for_profile, select_framework};
