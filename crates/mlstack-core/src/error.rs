//! Errors surfaced by the resolution services.

use thiserror::Error;

use crate::ports::FeedError;
use crate::presets::PresetError;

/// Failure of a stack resolution.
///
/// Probe failures never appear here; they degrade inside the probe.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Preset(#[from] PresetError),

    #[error("Failed to fetch release history: {0}")]
    Feed(#[from] FeedError),
}
