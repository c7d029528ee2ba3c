//! Runtime environment resolution.
//!
//! Determines which environment (development, test, production, or any
//! other name) the process is running in. The priority chain is:
//!
//! 1. `SIOP_ENV` environment variable
//! 2. `siop.environment` property (see [`crate::properties`])
//! 3. Fallback to "development"
//!
//! Resolution happens once per process; see [`ResolvedEnvironment::current`].

pub mod resolver;
pub mod variant;

pub use resolver::{
    current_env, env_name, EnvironmentSource, ResolvedEnvironment, DEFAULT_NAME, ENV_VAR,
    PROPERTY_KEY,
};
pub use variant::{normalize, Environment};
