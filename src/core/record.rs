//! Tracked repository records.

use serde::{Deserialize, Serialize};

/// A repository tracked for recency.
///
/// Identity is the `name` field: two records with the same name are the
/// same entry in a [`RecentList`](crate::core::RecentList), whatever their
/// url or description.
///
/// # Examples
///
/// ```rust
/// use recent_repos::core::Record;
///
/// let record = Record::new("xeno", "https://github.com/user/xeno")
///     .with_description("modal editor");
/// assert_eq!(record.name, "xeno");
/// assert_eq!(record.description, "modal editor");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique repository name
    pub name: String,
    /// Repository URL
    pub url: String,
    /// Free-form description, empty when not given
    #[serde(default)]
    pub description: String,
}

impl Record {
    /// Create a record with an empty description.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: String::new(),
        }
    }

    /// Set the description for this record.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_defaults_to_empty() {
        let record = Record::new("test-repo", "https://github.com/user/test-repo");
        assert_eq!(record.description, "");
    }

    #[test]
    fn test_deserialize_without_description() {
        let record: Record = serde_json::from_str(
            r#"{"name": "test-repo", "url": "https://github.com/user/test-repo"}"#,
        )
        .unwrap();
        assert_eq!(record, Record::new("test-repo", "https://github.com/user/test-repo"));
    }
}
