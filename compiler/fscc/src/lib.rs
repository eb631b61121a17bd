//! Format string checker driver.
//!
//! Library half of the `fsc` binary: option parsing, batch input handling
//! and the command implementations. `main.rs` only dispatches on the
//! command name.

pub mod batch;
pub mod commands;
mod config;
mod tracing_setup;

pub use config::{CliConfig, ConfigError};
pub use tracing_setup::init_tracing;
