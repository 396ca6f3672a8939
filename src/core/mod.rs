//! Core tracking types.

mod builder;
mod recent;
mod record;
mod settings;
mod tracker;
mod validation;

pub use builder::RecentReposBuilder;
pub use recent::{DEFAULT_CAPACITY, RecentList};
pub use record::Record;
pub use settings::TrackerConfig;
pub use tracker::RecentRepos;
pub use validation::Validate;
