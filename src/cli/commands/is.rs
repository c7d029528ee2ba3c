//! Is command implementation.
//!
//! `siop-env is <ENVIRONMENT>` exits 0 when the resolved environment is
//! the given one and 1 otherwise, for use in shell conditionals.

use std::io::Write;

use crate::cli::args::IsArgs;
use crate::environment::ResolvedEnvironment;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// The is command implementation.
pub struct IsCommand<'a> {
    environment: &'a ResolvedEnvironment,
    args: IsArgs,
}

impl<'a> IsCommand<'a> {
    /// Create a new is command.
    pub fn new(environment: &'a ResolvedEnvironment, args: IsArgs) -> Self {
        Self { environment, args }
    }

    /// Whether the resolved variant matches the requested one.
    ///
    /// Compares variants, not names: any two unrecognized names match.
    pub fn matches(&self) -> bool {
        self.environment.environment() == self.args.environment
    }
}

impl Command for IsCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let matched = self.matches();

        if !self.args.quiet {
            let verb = if matched { "is" } else { "is not" };
            writeln!(
                out,
                "{} {} {}",
                self.environment.environment(),
                verb,
                self.args.environment
            )?;
        }

        Ok(if matched {
            CommandResult::success()
        } else {
            CommandResult::failure(1)
        })
    }
}
