//! Environment resolution.
//!
//! Resolves the environment name using the priority chain:
//! 1. `SIOP_ENV` environment variable (if present, even when empty)
//! 2. `siop.environment` property
//! 3. Fallback to "development"
//!
//! The name is ASCII-uppercased and looked up in the variant table.

use std::env::VarError;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

use super::variant::{normalize, Environment};
use crate::properties;

/// Environment variable consulted first.
pub const ENV_VAR: &str = "SIOP_ENV";

/// Property consulted when [`ENV_VAR`] is absent.
pub const PROPERTY_KEY: &str = "siop.environment";

/// Name used when neither source is set.
pub const DEFAULT_NAME: &str = "development";

static CURRENT: OnceLock<ResolvedEnvironment> = OnceLock::new();

/// How the environment name was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentSource {
    /// Read from the `SIOP_ENV` variable.
    Variable,
    /// Read from the `siop.environment` property.
    Property,
    /// Fallback to "development".
    Default,
}

impl fmt::Display for EnvironmentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable => write!(f, "{} variable", ENV_VAR),
            Self::Property => write!(f, "{} property", PROPERTY_KEY),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A resolved environment: the normalized name, its variant and its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEnvironment {
    environment: Environment,
    name: String,
    source: EnvironmentSource,
}

impl ResolvedEnvironment {
    /// The process-wide snapshot.
    ///
    /// Resolved on first call and frozen afterwards: later changes to
    /// `SIOP_ENV` or the properties are not observed. Concurrent first
    /// callers all receive the same snapshot.
    pub fn current() -> &'static ResolvedEnvironment {
        CURRENT.get_or_init(|| {
            let resolved = Self::resolve();
            tracing::debug!(
                "Environment resolved to {} (name {:?}, from {})",
                resolved.environment,
                resolved.name,
                resolved.source
            );
            resolved
        })
    }

    /// Resolve against the real process environment and properties.
    ///
    /// Does not touch the snapshot returned by [`current`](Self::current).
    pub fn resolve() -> Self {
        Self::resolve_with(|key| std::env::var(key), properties::property)
    }

    /// Resolve with custom variable and property lookups.
    ///
    /// # Example
    ///
    /// ```
    /// use std::env::VarError;
    /// use siop_env::{Environment, EnvironmentSource, ResolvedEnvironment};
    ///
    /// let resolved = ResolvedEnvironment::resolve_with(
    ///     |_| Err(VarError::NotPresent),
    ///     |_| Some("Production".to_string()),
    /// );
    /// assert_eq!(resolved.environment(), Environment::Production);
    /// assert_eq!(resolved.name(), "PRODUCTION");
    /// assert_eq!(resolved.source(), EnvironmentSource::Property);
    /// ```
    pub fn resolve_with<E, P>(env_fn: E, prop_fn: P) -> Self
    where
        E: Fn(&str) -> Result<String, VarError>,
        P: Fn(&str) -> Option<String>,
    {
        let (raw, source) = match env_fn(ENV_VAR) {
            Ok(value) => (value, EnvironmentSource::Variable),
            Err(VarError::NotUnicode(raw)) => {
                let value = raw.to_string_lossy().into_owned();
                tracing::warn!(
                    "{} is not valid UTF-8, using lossy value {:?}",
                    ENV_VAR,
                    value
                );
                (value, EnvironmentSource::Variable)
            }
            Err(VarError::NotPresent) => match prop_fn(PROPERTY_KEY) {
                Some(value) => (value, EnvironmentSource::Property),
                None => (DEFAULT_NAME.to_string(), EnvironmentSource::Default),
            },
        };

        Self::from_name(&raw, source)
    }

    /// Build a resolved environment from a raw (not yet normalized) name.
    pub fn from_name(raw: &str, source: EnvironmentSource) -> Self {
        let name = normalize(raw);
        Self {
            environment: Environment::lookup(&name),
            name,
            source,
        }
    }

    /// The matched variant, [`Environment::Other`] for unknown names.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// The uppercased name used for the lookup.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> EnvironmentSource {
        self.source
    }
}

/// The current runtime environment.
pub fn current_env() -> Environment {
    ResolvedEnvironment::current().environment()
}

/// The resolved, uppercased environment name.
pub fn env_name() -> &'static str {
    ResolvedEnvironment::current().name()
}
