//! Event payload handed to notification targets.

use crate::core::Record;
use serde::{Deserialize, Serialize};

/// Payload built for a single dispatch and passed to every target.
///
/// Holds a copy of the repository record so targets never observe the
/// tracker's internal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// The repository the action is taken against
    pub record: Record,
    /// Issue title
    pub title: String,
    /// Issue body, empty when not given
    #[serde(default)]
    pub body: String,
}

impl Event {
    /// Build an event for a repository.
    pub fn new(record: Record, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            record,
            title: title.into(),
            body: body.into(),
        }
    }
}
