//! Show command implementation.
//!
//! The `siop-env show` command prints the resolved environment.

use std::io::Write;

use crate::cli::args::ShowArgs;
use crate::environment::ResolvedEnvironment;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand<'a> {
    environment: &'a ResolvedEnvironment,
    args: ShowArgs,
}

impl<'a> ShowCommand<'a> {
    /// Create a new show command.
    pub fn new(environment: &'a ResolvedEnvironment, args: ShowArgs) -> Self {
        Self { environment, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ShowArgs {
        &self.args
    }
}

impl Command for ShowCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        if self.args.json {
            let json = serde_json::to_string_pretty(self.environment).map_err(anyhow::Error::from)?;
            writeln!(out, "{}", json)?;
        } else {
            writeln!(out, "environment: {}", self.environment.environment())?;
            writeln!(out, "name: {}", self.environment.name())?;
            writeln!(out, "source: {}", self.environment.source())?;
        }

        Ok(CommandResult::success())
    }
}
