//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed to by the
//! [`CommandDispatcher`].

pub mod apply;
pub mod completions;
pub mod dispatcher;
pub mod env;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
