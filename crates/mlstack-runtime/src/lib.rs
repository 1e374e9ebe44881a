#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod command;
mod error;
pub mod installer;
pub mod python;
pub mod system;

pub use command::SystemCommandRunner;
pub use error::InstallError;
pub use installer::{InstallOptions, ValidationReport, install_stack, validate_environment};
pub use system::DefaultSystemProbe;

#[cfg(test)]
pub(crate) mod testing;
