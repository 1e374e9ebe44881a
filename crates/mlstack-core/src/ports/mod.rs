//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or `std::process` types in any signature
//! - Local probes are infallible: failures degrade to `None`/`false`
//! - Only the remote feed returns errors

pub mod command_runner;
pub mod release_feed;
pub mod system_probe;

pub use command_runner::{CommandError, CommandOutput, CommandRunnerPort};
pub use release_feed::{FeedError, FeedResult, ReleaseFeedPort};
pub use system_probe::SystemProbePort;

#[cfg(test)]
pub use release_feed::MockReleaseFeedPort;
