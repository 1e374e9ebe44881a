#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultPypiClient is meant to be used through ReleaseFeedPort, not its
// generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultPypiClient;

// Configuration
pub use config::{DEFAULT_INDEX_URL, PypiClientConfig};
