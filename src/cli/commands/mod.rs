//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands receive the resolved environment from [`CommandDispatcher`]
//! rather than reading process-wide state themselves.

pub mod dispatcher;
pub mod is;
pub mod show;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
