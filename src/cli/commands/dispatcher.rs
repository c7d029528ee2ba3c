//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use crate::cli::args::{Cli, Commands, ShowArgs};
use crate::environment::ResolvedEnvironment;
use crate::error::Result;

use super::is::IsCommand;
use super::show::ShowCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing its output to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<'a> {
    environment: &'a ResolvedEnvironment,
}

impl<'a> CommandDispatcher<'a> {
    /// Create a dispatcher over an already resolved environment.
    pub fn new(environment: &'a ResolvedEnvironment) -> Self {
        Self { environment }
    }

    pub fn environment(&self) -> &ResolvedEnvironment {
        self.environment
    }

    /// Dispatch and execute a command.
    ///
    /// `show` runs when no subcommand is given.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Show(args)) => {
                ShowCommand::new(self.environment, args.clone()).execute(out)
            }
            Some(Commands::Is(args)) => {
                IsCommand::new(self.environment, args.clone()).execute(out)
            }
            None => ShowCommand::new(self.environment, ShowArgs::default()).execute(out),
        }
    }
}
