//! Tracker configuration values.

use crate::core::{DEFAULT_CAPACITY, Validate};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Settings for a [`RecentRepos`](crate::core::RecentRepos) tracker.
///
/// Every field has a default, so an empty file or no sources at all yield a
/// usable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Maximum number of repositories kept in the recent list
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Validate for TrackerConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.capacity == 0 {
            return Err(ValidationError::invalid_field(
                "capacity",
                "must be greater than 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = TrackerConfig::default();
        assert_eq!(config.capacity, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_capacity_uses_default() {
        let config: TrackerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = TrackerConfig { capacity: 0 }.validate().unwrap_err();
        assert!(err.to_string().contains("capacity"));
    }
}
