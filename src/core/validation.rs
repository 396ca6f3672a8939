//! Configuration validation support.

use crate::error::ValidationError;

/// Trait for configuration validation.
///
/// Implemented by [`TrackerConfig`](crate::core::TrackerConfig) so that a
/// configuration loaded from files or the environment is checked before a
/// tracker is created from it.
///
/// # Examples
///
/// ```rust
/// use recent_repos::core::{TrackerConfig, Validate};
///
/// assert!(TrackerConfig { capacity: 5 }.validate().is_ok());
/// assert!(TrackerConfig { capacity: 0 }.validate().is_err());
/// ```
pub trait Validate {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Should return a `ValidationError` describing what validation failed.
    fn validate(&self) -> Result<(), ValidationError>;
}
