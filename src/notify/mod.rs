//! Notification fan-out for actions taken against tracked repositories.
//!
//! Targets are registered once and invoked synchronously, in registration
//! order, with an [`Event`] describing the repository and the action.

mod event;
mod registry;
mod target;

pub use event::Event;
pub use registry::TargetRegistry;
pub use target::NotificationTarget;
