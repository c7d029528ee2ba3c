//! siop-env - Runtime environment resolution for SIOP services.
//!
//! Answers one question for the whole process: is this development, test,
//! production, or something else? The answer comes from the `SIOP_ENV`
//! variable, else the `siop.environment` property, else "development",
//! and is frozen on first access.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface for the `siop-env` binary
//! - [`environment`] - Environment variants and resolution
//! - [`error`] - Error types and result aliases
//! - [`properties`] - Process-wide configuration properties
//!
//! # Example
//!
//! ```
//! use siop_env::{current_env, env_name, Environment};
//!
//! let env = current_env();
//! if env == Environment::Other {
//!     println!("custom environment {}", env_name());
//! }
//! assert_eq!(env, current_env());
//! ```

pub mod cli;
pub mod environment;
pub mod error;
pub mod properties;

pub use environment::{current_env, env_name, Environment, EnvironmentSource, ResolvedEnvironment};
pub use error::{Result, SiopEnvError};
