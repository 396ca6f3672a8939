//! Recent repository tracker with notification fan-out.

use crate::core::{RecentList, Record, TrackerConfig};
use crate::error::TrackerError;
use crate::notify::{Event, NotificationTarget, TargetRegistry};
use std::fmt;
use tracing::{debug, warn};

/// Tracks recently used repositories and notifies targets about actions
/// taken against them.
///
/// `R` is the value each notification target returns and `E` its error
/// type. Dispatching collects one `R` per target, in registration order.
///
/// The tracker is a plain single-threaded data structure: mutation takes
/// `&mut self` and nothing is locked internally. Wrap it in a mutex to share
/// it between threads.
///
/// # Examples
///
/// ```rust
/// use recent_repos::prelude::*;
///
/// # fn example() -> Result<()> {
/// let mut repos: RecentRepos<String> = RecentRepos::new(10);
/// repos.add_with_description("xeno", "https://github.com/user/xeno", "modal editor");
///
/// repos.register_fn(|event| Ok(format!("opened '{}' on {}", event.title, event.record.name)));
///
/// let results = repos.dispatch("xeno", "Crash on startup", "")?;
/// assert_eq!(results, ["opened 'Crash on startup' on xeno"]);
///
/// assert!(repos.dispatch("unknown", "Bug", "").is_err());
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct RecentRepos<R, E = TrackerError> {
    /// Recently used repositories, most recent first
    recent: RecentList,
    /// Targets invoked on dispatch
    targets: TargetRegistry<R, E>,
}

impl<R, E> RecentRepos<R, E> {
    /// Create a tracker keeping at most `capacity` repositories.
    ///
    /// For trackers configured from files or the environment, use
    /// [`RecentRepos::builder`] instead.
    pub fn new(capacity: usize) -> Self {
        Self {
            recent: RecentList::new(capacity),
            targets: TargetRegistry::new(),
        }
    }

    /// Create a tracker from already resolved settings.
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self::new(config.capacity)
    }

    /// Record a repository as the most recently used one.
    ///
    /// An already tracked repository keeps its description.
    pub fn add(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.recent.add(name, url);
    }

    /// Record a repository with a description as the most recently used one.
    pub fn add_with_description(
        &mut self,
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.recent.add_with_description(name, url, description);
    }

    /// Copy of the tracked repositories, most recent first.
    pub fn list(&self, limit: Option<usize>) -> Vec<Record> {
        self.recent.list(limit)
    }

    /// Look up a tracked repository by name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.recent.get(name)
    }

    /// Borrow the underlying recent list.
    pub fn recent(&self) -> &RecentList {
        &self.recent
    }

    /// Forget every tracked repository.
    pub fn clear_repositories(&mut self) {
        self.recent.clear();
    }

    /// Register a notification target. Registering the same target twice
    /// has no effect.
    ///
    /// Returns `true` if the target was added.
    pub fn register(&mut self, target: NotificationTarget<R, E>) -> bool {
        self.targets.register(target)
    }

    /// Register a callback as a new notification target and return its
    /// handle.
    pub fn register_fn<F>(&mut self, callback: F) -> NotificationTarget<R, E>
    where
        F: Fn(&Event) -> Result<R, E> + Send + Sync + 'static,
    {
        self.targets.register_fn(callback)
    }

    /// Get the number of registered targets.
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Borrow the underlying target registry.
    pub fn targets(&self) -> &TargetRegistry<R, E> {
        &self.targets
    }

    /// Remove every notification target.
    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    /// Notify every target about an action on a tracked repository.
    ///
    /// Targets run synchronously in registration order, each receiving the
    /// same [`Event`]. Their results are returned in that order.
    ///
    /// # Errors
    ///
    /// - [`TrackerError::NotFound`], converted into `E`, if `name` is not
    ///   tracked. No target is invoked.
    /// - The first error returned by a target, unmodified. Later targets are
    ///   not invoked.
    pub fn dispatch(
        &self,
        name: &str,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Vec<R>, E>
    where
        E: From<TrackerError>,
    {
        let Some(record) = self.recent.get(name) else {
            warn!(name, "Dispatch for repository that is not tracked");
            return Err(TrackerError::NotFound(name.to_string()).into());
        };

        let event = Event::new(record.clone(), title, body);
        debug!(
            name,
            title = %event.title,
            targets = self.targets.len(),
            "Dispatching repository event"
        );

        self.targets.notify_all(&event)
    }
}

impl<R, E> Default for RecentRepos<R, E> {
    fn default() -> Self {
        Self::from_config(&TrackerConfig::default())
    }
}

impl<R, E> Clone for RecentRepos<R, E> {
    fn clone(&self) -> Self {
        Self {
            recent: self.recent.clone(),
            targets: self.targets.clone(),
        }
    }
}

impl<R, E> fmt::Debug for RecentRepos<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecentRepos")
            .field("recent", &self.recent)
            .field("targets", &self.targets.len())
            .finish()
    }
}
