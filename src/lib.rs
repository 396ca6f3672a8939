//! # recent-repos
//!
//! Bounded most-recently-used repository tracking with synchronous
//! notification fan-out.
//!
//! ## Overview
//!
//! `recent-repos` keeps a short list of the repositories a user touched last
//! and lets callers act on one of them ("open an issue on `xeno`") by
//! notifying every registered target:
//! - A capacity-bounded list, most recent first, unique by name
//! - Re-adding a repository moves it to the front instead of duplicating it
//! - Targets deduplicated by identity and invoked in registration order
//! - Fail-fast dispatch: the first target error is returned unmodified
//! - Capacity configurable from files and environment variables
//!
//! ## Quick Start
//!
//! ```rust
//! use recent_repos::prelude::*;
//!
//! # fn example() -> Result<()> {
//! let mut repos: RecentRepos<String> = RecentRepos::builder().with_capacity(3).build()?;
//!
//! for name in ["a", "b", "c", "d"] {
//!     repos.add(name, format!("https://github.com/user/{name}"));
//! }
//! let names: Vec<_> = repos.list(None).into_iter().map(|r| r.name).collect();
//! assert_eq!(names, ["d", "c", "b"]);
//!
//! repos.register_fn(|event| Ok(format!("issue '{}' on {}", event.title, event.record.url)));
//! let results = repos.dispatch("c", "Flaky test", "fails on CI")?;
//! assert_eq!(results, ["issue 'Flaky test' on https://github.com/user/c"]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Concurrency
//!
//! Everything runs on the caller's thread. Dispatch has no timeout: a target
//! that never returns blocks the caller. Share a tracker between threads by
//! wrapping it in a mutex.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod notify;
pub mod sources;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{RecentList, RecentRepos, RecentReposBuilder, Record, TrackerConfig};
    pub use crate::error::{Result, TrackerError, ValidationError};
    pub use crate::notify::{Event, NotificationTarget, TargetRegistry};
}
