//! Ordered registry of notification targets.

use crate::error::TrackerError;
use crate::notify::{Event, NotificationTarget};
use tracing::{debug, trace};

/// Registry of notification targets invoked on dispatch.
///
/// Targets are kept in registration order and deduplicated by identity.
/// Notification is synchronous and fail-fast: the first target error is
/// returned as is and the remaining targets are skipped.
///
/// # Examples
///
/// ```rust
/// use recent_repos::core::Record;
/// use recent_repos::notify::{Event, NotificationTarget, TargetRegistry};
///
/// let mut registry: TargetRegistry<&'static str> = TargetRegistry::new();
/// let target = NotificationTarget::new(|_event| Ok("created"));
///
/// assert!(registry.register(target.clone()));
/// assert!(!registry.register(target));
///
/// let event = Event::new(Record::new("repo", "https://github.com/user/repo"), "Bug", "");
/// assert_eq!(registry.notify_all(&event).unwrap(), ["created"]);
/// ```
pub struct TargetRegistry<R, E = TrackerError> {
    targets: Vec<NotificationTarget<R, E>>,
}

impl<R, E> TargetRegistry<R, E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    /// Register a target unless the same target is already registered.
    ///
    /// Returns `true` if the target was added.
    pub fn register(&mut self, target: NotificationTarget<R, E>) -> bool {
        if self.contains(&target) {
            debug!(?target, "Notification target already registered");
            return false;
        }

        debug!(?target, position = self.targets.len(), "Registering notification target");
        self.targets.push(target);
        true
    }

    /// Wrap a callback into a new target and register it.
    ///
    /// Returns the handle so the same target can be compared or registered
    /// elsewhere.
    pub fn register_fn<F>(&mut self, callback: F) -> NotificationTarget<R, E>
    where
        F: Fn(&Event) -> Result<R, E> + Send + Sync + 'static,
    {
        let target = NotificationTarget::new(callback);
        self.register(target.clone());
        target
    }

    /// Check whether this exact target is registered.
    pub fn contains(&self, target: &NotificationTarget<R, E>) -> bool {
        self.targets.iter().any(|t| t.same_target(target))
    }

    /// Invoke every target in registration order and collect the results.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by a target, unmodified. Targets
    /// registered after the failing one are not invoked.
    pub fn notify_all(&self, event: &Event) -> Result<Vec<R>, E> {
        self.targets
            .iter()
            .enumerate()
            .map(|(position, target)| {
                trace!(position, repository = %event.record.name, "Invoking notification target");
                target.call(event)
            })
            .collect()
    }

    /// Get the number of registered targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Check if no targets are registered.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Remove every target.
    pub fn clear(&mut self) {
        if !self.targets.is_empty() {
            debug!(count = self.targets.len(), "Clearing notification targets");
        }
        self.targets.clear();
    }
}

impl<R, E> Default for TargetRegistry<R, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, E> Clone for TargetRegistry<R, E> {
    fn clone(&self) -> Self {
        Self {
            targets: self.targets.clone(),
        }
    }
}
