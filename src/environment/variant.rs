//! The closed set of runtime environments.
//!
//! [`Environment`] has exactly four variants. Three of them are matched by
//! name; [`Environment::Other`] is what every other name resolves to.

use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::Serialize;

/// Name-to-variant table, built once from [`Environment::ALL`].
///
/// `OTHER` is never a key; it is only the fallback result.
static LOOKUP: LazyLock<HashMap<&'static str, Environment>> = LazyLock::new(|| {
    Environment::ALL
        .into_iter()
        .filter(|env| !env.is_other())
        .map(|env| (env.name(), env))
        .collect()
});

/// A runtime environment.
///
/// # Example
///
/// ```
/// use siop_env::Environment;
///
/// assert_eq!(Environment::lookup("PRODUCTION"), Environment::Production);
/// assert_eq!(Environment::lookup("STAGING"), Environment::Other);
/// assert_eq!("test".parse::<Environment>().unwrap(), Environment::Test);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Environment {
    /// Development environment.
    Development,
    /// Test environment.
    Test,
    /// Production environment.
    Production,
    /// Any environment name outside the three above.
    Other,
}

impl Environment {
    /// Every variant, in declaration order.
    pub const ALL: [Environment; 4] = [
        Environment::Development,
        Environment::Test,
        Environment::Production,
        Environment::Other,
    ];

    /// Canonical uppercase name of this variant.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Development => "DEVELOPMENT",
            Self::Test => "TEST",
            Self::Production => "PRODUCTION",
            Self::Other => "OTHER",
        }
    }

    /// Look up an already-normalized name.
    ///
    /// The match is exact; callers are expected to uppercase first (see
    /// [`normalize`]). Anything not in the table, including `"OTHER"`
    /// itself, yields [`Environment::Other`].
    pub fn lookup(name: &str) -> Self {
        LOOKUP.get(name).copied().unwrap_or(Self::Other)
    }

    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn is_test(self) -> bool {
        matches!(self, Self::Test)
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn is_other(self) -> bool {
        matches!(self, Self::Other)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Environment {
    type Err = Infallible;

    /// Normalizes then looks up. Never fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::lookup(&normalize(s)))
    }
}

/// Normalize an environment name (locale-independent ASCII uppercasing).
pub fn normalize(name: &str) -> String {
    name.to_ascii_uppercase()
}
