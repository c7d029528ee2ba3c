//! Process-wide configuration properties.
//!
//! A small string map shared by the whole process, in the spirit of
//! JVM system properties. Properties are normally defined at startup
//! (for example from `-D key=value` flags) before the environment is
//! resolved.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{LazyLock, PoisonError, RwLock};

use crate::error::SiopEnvError;

static PROPERTIES: LazyLock<RwLock<HashMap<String, String>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Set a property, returning the previous value if there was one.
///
/// # Example
///
/// ```
/// use siop_env::properties::{property, remove_property, set_property};
///
/// set_property("doc.example.key", "value");
/// assert_eq!(property("doc.example.key").as_deref(), Some("value"));
/// remove_property("doc.example.key");
/// ```
pub fn set_property(key: impl Into<String>, value: impl Into<String>) -> Option<String> {
    PROPERTIES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key.into(), value.into())
}

/// Read a property.
pub fn property(key: &str) -> Option<String> {
    PROPERTIES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(key)
        .cloned()
}

/// Remove a property, returning its value if it was set.
pub fn remove_property(key: &str) -> Option<String> {
    PROPERTIES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .remove(key)
}

/// A `key=value` property definition.
///
/// A bare `key` defines the property with an empty value. The key must not
/// be empty. Only the first `=` separates key from value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyAssignment {
    pub key: String,
    pub value: String,
}

impl PropertyAssignment {
    /// Write this assignment to the process-wide properties.
    pub fn apply(&self) -> Option<String> {
        tracing::debug!("Setting property {}={}", self.key, self.value);
        set_property(self.key.clone(), self.value.clone())
    }
}

impl FromStr for PropertyAssignment {
    type Err = SiopEnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s.split_once('=').unwrap_or((s, ""));
        let key = key.trim();
        if key.is_empty() {
            return Err(SiopEnvError::InvalidProperty {
                assignment: s.to_string(),
                message: "property name is empty".into(),
            });
        }
        Ok(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}
