//! Capacity-bounded most-recently-used list of records.

use crate::core::Record;
use std::collections::VecDeque;
use tracing::debug;

/// Number of records kept when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 10;

/// Ordered list of recently used repositories, most recent first.
///
/// Names are unique and the list never holds more than `capacity` records.
/// Adding a record that is already present moves it to the front; adding
/// past capacity drops the least recently used record from the tail.
///
/// # Examples
///
/// ```rust
/// use recent_repos::core::RecentList;
///
/// let mut recent = RecentList::new(3);
/// for name in ["a", "b", "c", "d"] {
///     recent.add(name, format!("https://github.com/user/{name}"));
/// }
///
/// let names: Vec<_> = recent.iter().map(|r| r.name.as_str()).collect();
/// assert_eq!(names, ["d", "c", "b"]);
/// ```
#[derive(Debug, Clone)]
pub struct RecentList {
    records: VecDeque<Record>,
    capacity: usize,
}

impl RecentList {
    /// Create an empty list holding at most `capacity` records.
    ///
    /// A capacity of zero is accepted and keeps the list permanently empty.
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::new(),
            capacity,
        }
    }

    /// Add or touch a repository, keeping any description already stored.
    ///
    /// A new repository gets an empty description. An existing one is moved
    /// to the front with the given url and its previous description.
    pub fn add(&mut self, name: impl Into<String>, url: impl Into<String>) {
        let name = name.into();
        let description = self
            .get(&name)
            .map(|existing| existing.description.clone())
            .unwrap_or_default();
        self.insert(Record {
            name,
            url: url.into(),
            description,
        });
    }

    /// Add or replace a repository together with its description.
    pub fn add_with_description(
        &mut self,
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.insert(Record::new(name, url).with_description(description));
    }

    /// Insert a complete record at the front, replacing any record with the
    /// same name, then trim the tail down to capacity.
    pub fn insert(&mut self, record: Record) {
        self.records.retain(|r| r.name != record.name);
        debug!(name = %record.name, "Recording repository as most recent");
        self.records.push_front(record);

        // Trim to capacity
        while self.records.len() > self.capacity {
            if let Some(evicted) = self.records.pop_back() {
                debug!(name = %evicted.name, capacity = self.capacity, "Evicted least recent repository");
            }
        }
    }

    /// Copy out the records, most recent first, optionally limited to the
    /// first `limit` entries.
    pub fn list(&self, limit: Option<usize>) -> Vec<Record> {
        let limit = limit.unwrap_or(self.records.len());
        self.records.iter().take(limit).cloned().collect()
    }

    /// Look up a record by name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Check whether a repository with this name is tracked.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over the records, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Number of tracked records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no records are tracked.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum number of records kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        if !self.records.is_empty() {
            debug!(count = self.records.len(), "Clearing recent repositories");
        }
        self.records.clear();
    }
}

impl Default for RecentList {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
