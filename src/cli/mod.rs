//! Command-line interface for antora-ci.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{ApplyArgs, Cli, Commands, CompletionsArgs, EnvArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
