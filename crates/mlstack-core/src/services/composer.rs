//! Stack composition: preset, detector pair and framework pick merged into
//! one installable stack.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::{DetectorResolver, DiagnosticsService, FrameworkResolver};
use crate::domain::{DiagnosticsReport, FrameworkPreference, Stack, VersionFamily};
use crate::error::ResolveError;
use crate::manifest::render_dockerfile;
use crate::ports::{ReleaseFeedPort, SystemProbePort};
use crate::presets::PresetStore;

/// Default use case when none is given.
pub const DEFAULT_USE_CASE: &str = "research";

/// Inputs of one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    /// Preset name.
    pub use_case: String,
    pub family: VersionFamily,
    /// Request accelerator builds for the detector's companion framework.
    pub gpu: bool,
    /// Separately requested framework; overrides the detector's pick.
    pub framework: Option<FrameworkPreference>,
}

impl Default for ResolveRequest {
    fn default() -> Self {
        Self {
            use_case: DEFAULT_USE_CASE.to_string(),
            family: VersionFamily::default(),
            gpu: false,
            framework: None,
        }
    }
}

/// Final stack plus everything derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedStack {
    pub use_case: String,
    pub stack: Stack,
    pub diagnostics: DiagnosticsReport,
    pub install_command: String,
    pub dockerfile: String,
}

impl ResolvedStack {
    fn new(use_case: &str, stack: Stack, diagnostics: DiagnosticsReport) -> Self {
        Self {
            use_case: use_case.to_string(),
            install_command: stack.install_command(),
            dockerfile: render_dockerfile(&stack),
            stack,
            diagnostics,
        }
    }
}

/// Orchestrates presets, resolvers and diagnostics.
pub struct StackComposer {
    presets: PresetStore,
    detector: DetectorResolver,
    frameworks: FrameworkResolver,
    diagnostics: DiagnosticsService,
}

impl StackComposer {
    pub fn new(
        presets: PresetStore,
        feed: Arc<dyn ReleaseFeedPort>,
        probe: Arc<dyn SystemProbePort>,
    ) -> Self {
        Self {
            presets,
            detector: DetectorResolver::new(feed),
            frameworks: FrameworkResolver::new(Arc::clone(&probe)),
            diagnostics: DiagnosticsService::new(probe),
        }
    }

    pub const fn presets(&self) -> &PresetStore {
        &self.presets
    }

    pub const fn diagnostics(&self) -> &DiagnosticsService {
        &self.diagnostics
    }

    pub async fn resolve_detector_stack(
        &self,
        family: VersionFamily,
        gpu: bool,
    ) -> Result<Stack, ResolveError> {
        Ok(self.detector.resolve(family, gpu).await?)
    }

    pub fn resolve_framework_stack(&self, prefer: FrameworkPreference) -> Stack {
        self.frameworks.resolve(prefer)
    }

    /// Merge preset, detector pair and optional framework pick, in that
    /// order. Later merges win.
    pub async fn resolve_stack(&self, request: &ResolveRequest) -> Result<Stack, ResolveError> {
        let mut stack = self.presets.get_preset(&request.use_case)?;
        debug!(use_case = %request.use_case, entries = stack.len(), "Loaded base preset");

        let detector = self
            .resolve_detector_stack(request.family, request.gpu)
            .await?;
        stack.merge(&detector);

        if let Some(prefer) = request.framework {
            let framework = self.resolve_framework_stack(prefer);
            stack.merge(&framework);
        }

        Ok(stack)
    }

    /// Resolve the stack and derive diagnostics, install command and
    /// container manifest.
    pub async fn resolve_universal_stack(
        &self,
        request: &ResolveRequest,
    ) -> Result<ResolvedStack, ResolveError> {
        let stack = self.resolve_stack(request).await?;
        let diagnostics = self.diagnostics.detect_all_conflicts();

        info!(
            use_case = %request.use_case,
            family = %request.family,
            gpu = request.gpu,
            packages = stack.len(),
            "Resolved stack"
        );

        Ok(ResolvedStack::new(&request.use_case, stack, diagnostics))
    }
}
