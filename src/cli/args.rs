//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};

use crate::environment::Environment;
use crate::properties::PropertyAssignment;

/// siop-env - Runtime environment resolution for SIOP services.
#[derive(Debug, Parser)]
#[command(name = "siop-env")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Define a property before resolving (e.g. -D siop.environment=test)
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE", global = true)]
    pub define: Vec<PropertyAssignment>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the resolved environment (default if no command specified)
    Show(ShowArgs),

    /// Succeed only if the resolved environment matches
    Is(IsArgs),
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `is` command.
#[derive(Debug, Clone, Args)]
pub struct IsArgs {
    /// Environment to compare against (case-insensitive; unknown names mean OTHER)
    pub environment: Environment,

    /// Print nothing, only set the exit code
    #[arg(short, long)]
    pub quiet: bool,
}
