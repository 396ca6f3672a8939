//! Builder for constructing RecentRepos instances.

use crate::core::{RecentRepos, TrackerConfig, Validate};
use crate::error::{Result, TrackerError};
use crate::sources::{ConfigSource, EnvSource, FILE_PRIORITY, FileSource};
use std::path::PathBuf;
use tracing::{debug, info};

/// Builder for a [`RecentRepos`] tracker configured from files, the
/// environment, or explicit values.
///
/// Precedence, lowest first: defaults, files (in the order added), custom
/// sources (by their own priority), environment variables, then
/// [`with_capacity`](RecentReposBuilder::with_capacity).
///
/// # Examples
///
/// ```rust,no_run
/// use recent_repos::prelude::*;
///
/// # fn example() -> Result<()> {
/// let repos: RecentRepos<()> = RecentRepos::builder()
///     .with_file("recent.toml")
///     .with_env_overrides("RECENT", "__")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct RecentReposBuilder {
    sources: Vec<Box<dyn ConfigSource>>,
    file_count: usize,
    capacity: Option<usize>,
}

impl RecentReposBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            file_count: 0,
            capacity: None,
        }
    }

    /// Add a required settings file. Later files override earlier ones.
    ///
    /// Supported formats: YAML (.yaml, .yml), TOML (.toml), JSON (.json)
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        let priority = file_priority(self.file_count);
        self.file_count += 1;
        self.sources
            .push(Box::new(FileSource::new(path).with_priority(priority)));
        self
    }

    /// Read settings from environment variables starting with `prefix`.
    ///
    /// ```rust,no_run
    /// use recent_repos::prelude::*;
    ///
    /// // RECENT_CAPACITY=25 -> capacity = 25
    /// let builder = RecentRepos::builder().with_env_overrides("RECENT", "__");
    /// ```
    pub fn with_env_overrides(mut self, prefix: &str, separator: &str) -> Self {
        self.sources.push(Box::new(EnvSource::new(prefix, separator)));
        self
    }

    /// Add a custom settings source.
    pub fn with_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Fix the capacity, overriding every source.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Resolve and validate the settings without building a tracker.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A source cannot be loaded
    /// - The merged settings do not describe a `TrackerConfig`
    /// - The resolved settings are invalid (e.g. a capacity of 0)
    pub fn load_config(self) -> Result<TrackerConfig> {
        let mut config = merge_sources(self.sources)?;

        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }

        config.validate()?;
        Ok(config)
    }

    /// Build the tracker.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as
    /// [`load_config`](RecentReposBuilder::load_config).
    pub fn build<R, E>(self) -> Result<RecentRepos<R, E>> {
        let config = self.load_config()?;
        info!(capacity = config.capacity, "Recent repository tracker configured");
        Ok(RecentRepos::from_config(&config))
    }
}

impl Default for RecentReposBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecentRepos<()> {
    /// Create a new builder for constructing a tracker.
    pub fn builder() -> RecentReposBuilder {
        RecentReposBuilder::new()
    }
}

/// Priority of the `index`-th file added to a builder, saturating at `i32::MAX`.
fn file_priority(index: usize) -> i32 {
    i32::try_from(index)
        .ok()
        .and_then(|index| index.checked_mul(10))
        .map_or(i32::MAX, |offset| FILE_PRIORITY.saturating_add(offset))
}

/// Merge sources lowest priority first into tracker settings.
///
/// Keys a source leaves out keep the value of a lower priority source, or
/// the `TrackerConfig` default when no source sets them.
fn merge_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<TrackerConfig> {
    if sources.is_empty() {
        return Ok(TrackerConfig::default());
    }

    sources.sort_by_key(|source| source.priority());

    let mut merged = config::Config::builder();
    for source in &sources {
        let name = source.name();
        for (key, value) in source.load()? {
            merged = merged.set_override(&key, value).map_err(|e| {
                TrackerError::LoadError(format!("Failed to merge '{}' from {}: {}", key, name, e))
            })?;
        }
        debug!(source = %name, priority = source.priority(), "Merged tracker settings");
    }

    merged
        .build()
        .and_then(|merged| merged.try_deserialize::<TrackerConfig>())
        .map_err(|e| TrackerError::DeserializationError(format!("Invalid tracker settings: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedSource {
        name: &'static str,
        priority: i32,
        values: HashMap<String, config::Value>,
    }

    impl FixedSource {
        fn new(name: &'static str, priority: i32) -> Self {
            Self {
                name,
                priority,
                values: HashMap::new(),
            }
        }

        fn with_value(mut self, key: &str, value: impl Into<config::Value>) -> Self {
            self.values.insert(key.to_string(), value.into());
            self
        }
    }

    impl ConfigSource for FixedSource {
        fn load(&self) -> Result<HashMap<String, config::Value>> {
            Ok(self.values.clone())
        }

        fn name(&self) -> String {
            self.name.to_string()
        }

        fn priority(&self) -> i32 {
            self.priority
        }
    }

    #[test]
    fn test_builder_accumulates_files() {
        let builder = RecentReposBuilder::new()
            .with_file("recent1.yaml")
            .with_file("recent2.yaml")
            .with_file("recent3.yaml");

        assert_eq!(builder.file_count, 3);
        let priorities: Vec<_> = builder.sources.iter().map(|s| s.priority()).collect();
        assert_eq!(priorities, [100, 110, 120]);
    }

    #[test]
    fn test_builder_env_overrides() {
        let builder = RecentReposBuilder::new().with_env_overrides("APP", "__");

        assert_eq!(builder.sources.len(), 1);
        assert_eq!(builder.sources[0].name(), "env:APP*");
        assert_eq!(builder.sources[0].priority(), 300);
    }

    #[test]
    fn test_file_priority_saturates() {
        assert_eq!(file_priority(0), 100);
        assert_eq!(file_priority(2), 120);
        assert_eq!(file_priority(214_748_364), i32::MAX);
        assert_eq!(file_priority(usize::MAX), i32::MAX);
    }

    #[test]
    fn test_no_sources_uses_defaults() {
        let config = RecentReposBuilder::new().load_config().unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_source_without_capacity_uses_default() {
        let config = RecentReposBuilder::new()
            .with_source(FixedSource::new("empty", 100))
            .load_config()
            .unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_higher_priority_source_wins() {
        let config = RecentReposBuilder::new()
            .with_source(FixedSource::new("local", 200).with_value("capacity", 7i64))
            .with_source(FixedSource::new("defaults", 100).with_value("capacity", 3i64))
            .load_config()
            .unwrap();
        assert_eq!(config.capacity, 7);
    }

    #[test]
    fn test_non_numeric_capacity_rejected() {
        let result = RecentReposBuilder::new()
            .with_source(FixedSource::new("broken", 100).with_value("capacity", "many"))
            .load_config();
        assert!(matches!(result, Err(TrackerError::DeserializationError(_))));
    }

    #[test]
    fn test_explicit_capacity() {
        let repos: RecentRepos<()> = RecentReposBuilder::new()
            .with_source(FixedSource::new("defaults", 100).with_value("capacity", 3i64))
            .with_capacity(4)
            .build()
            .unwrap();
        assert_eq!(repos.recent().capacity(), 4);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result: Result<RecentRepos<()>> = RecentReposBuilder::new().with_capacity(0).build();
        assert!(matches!(result, Err(TrackerError::ValidationError(_))));
    }
}
