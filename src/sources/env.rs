//! Environment variable settings source.

use super::{ConfigSource, ENV_PRIORITY};
use crate::error::{Result, TrackerError};
use config::Environment;
use std::collections::HashMap;

/// Reads tracker settings from prefixed environment variables.
///
/// With prefix `APP` and separator `__`, `APP_CAPACITY=5` sets `capacity`.
///
/// # Examples
///
/// ```rust
/// use recent_repos::sources::EnvSource;
///
/// let source = EnvSource::new("RECENT", "__");
/// ```
pub struct EnvSource {
    prefix: String,
    separator: String,
}

impl EnvSource {
    /// Create a source for variables starting with `prefix`.
    ///
    /// `separator` splits nested keys (e.g. `__` for `APP_OUTER__INNER`).
    pub fn new(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            separator: separator.into(),
        }
    }
}

impl ConfigSource for EnvSource {
    fn load(&self) -> Result<HashMap<String, config::Value>> {
        let environment = Environment::with_prefix(&self.prefix)
            .prefix_separator("_")
            .separator(&self.separator)
            .try_parsing(true);

        config::Config::builder()
            .add_source(environment)
            .build()
            .map_err(|e| {
                TrackerError::LoadError(format!("Failed to read environment variables: {}", e))
            })?
            .try_deserialize::<HashMap<String, config::Value>>()
            .map_err(|e| {
                TrackerError::DeserializationError(format!(
                    "Failed to parse environment variables: {}",
                    e
                ))
            })
    }

    fn name(&self) -> String {
        format!("env:{}*", self.prefix)
    }

    fn priority(&self) -> i32 {
        ENV_PRIORITY
    }
}

#[cfg(test)]
#[allow(unsafe_code)] // For env var manipulation in tests
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_defaults() {
        let source = EnvSource::new("APP", "__");
        assert_eq!(source.prefix, "APP");
        assert_eq!(source.separator, "__");
        assert_eq!(source.priority(), 300);
        assert_eq!(source.name(), "env:APP*");
    }

    #[test]
    fn test_no_matching_variables() {
        let source = EnvSource::new("RECENT_REPOS_UNIT_UNSET", "__");
        assert!(source.load().unwrap().is_empty());
    }

    #[test]
    fn test_reads_prefixed_capacity() {
        unsafe {
            env::set_var("RECENT_REPOS_UNIT_ENV_CAPACITY", "6");
        }

        let values = EnvSource::new("RECENT_REPOS_UNIT_ENV", "__").load().unwrap();

        unsafe {
            env::remove_var("RECENT_REPOS_UNIT_ENV_CAPACITY");
        }

        let capacity = values.get("capacity").cloned().unwrap();
        assert_eq!(capacity.into_int().unwrap(), 6);
    }
}
