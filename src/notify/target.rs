//! Identity-compared notification target handles.

use crate::error::TrackerError;
use crate::notify::Event;
use std::fmt;
use std::sync::Arc;

/// Type alias for the callback stored inside a target.
type Callback<R, E> = Arc<dyn Fn(&Event) -> Result<R, E> + Send + Sync>;

/// A callable invoked with an [`Event`] on every dispatch.
///
/// Cloning a target yields the same target: equality is the identity of the
/// shared callback allocation, never a comparison of behaviour. Two targets
/// built from identical closures are distinct.
///
/// # Examples
///
/// ```rust
/// use recent_repos::notify::NotificationTarget;
///
/// let target: NotificationTarget<u32> = NotificationTarget::new(|_event| Ok(1));
/// let same = target.clone();
/// let other: NotificationTarget<u32> = NotificationTarget::new(|_event| Ok(1));
///
/// assert_eq!(target, same);
/// assert_ne!(target, other);
/// ```
pub struct NotificationTarget<R, E = TrackerError> {
    callback: Callback<R, E>,
}

impl<R, E> NotificationTarget<R, E> {
    /// Wrap a callback into a new target with its own identity.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&Event) -> Result<R, E> + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }

    /// Invoke the target with an event.
    pub fn call(&self, event: &Event) -> Result<R, E> {
        (self.callback)(event)
    }

    /// Check whether both handles refer to the same target.
    pub fn same_target(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.callback), Arc::as_ptr(&other.callback))
    }
}

impl<R, E> Clone for NotificationTarget<R, E> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<R, E> PartialEq for NotificationTarget<R, E> {
    fn eq(&self, other: &Self) -> bool {
        self.same_target(other)
    }
}

impl<R, E> Eq for NotificationTarget<R, E> {}

impl<R, E> fmt::Debug for NotificationTarget<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationTarget")
            .field("id", &Arc::as_ptr(&self.callback).cast::<()>())
            .finish()
    }
}
