//! Error types for recent-repos.

/// Result type alias for recent-repos operations.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Boxed error returned by a failing notification target.
pub type TargetError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when working with the tracker.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// A dispatch named a repository that is not in the recent list.
    #[error("Repository '{0}' not found in recent repositories")]
    NotFound(String),

    /// A notification target failed during dispatch.
    #[error("Notification target failed: {0}")]
    Target(#[source] TargetError),

    /// Failed to load tracker configuration from a source.
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    /// Failed to deserialize tracker configuration.
    #[error("Failed to deserialize configuration: {0}")]
    DeserializationError(String),

    /// Tracker configuration validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl TrackerError {
    /// Wrap an arbitrary error raised by a notification target.
    pub fn target(err: impl Into<TargetError>) -> Self {
        Self::Target(err.into())
    }

    /// Returns the missing repository name if this is a [`TrackerError::NotFound`].
    pub fn missing_name(&self) -> Option<&str> {
        match self {
            Self::NotFound(name) => Some(name),
            _ => None,
        }
    }
}

/// A tracker setting holds a value it cannot take.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Field '{field}' is invalid: {reason}")]
pub struct ValidationError {
    /// The field name/path
    pub field: String,
    /// The reason why it's invalid
    pub reason: String,
}

impl ValidationError {
    /// Create an invalid field error.
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<ValidationError> for TrackerError {
    fn from(err: ValidationError) -> Self {
        TrackerError::ValidationError(err.to_string())
    }
}
