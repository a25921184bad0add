//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the ideagen binary.

mod commands;
mod generate;
mod serve;

pub use commands::{CapabilityArg, Cli, Commands};
pub use generate::handle_generate_command;
pub use serve::handle_serve_command;
