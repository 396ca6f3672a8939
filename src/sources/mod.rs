//! Sources of tracker settings.
//!
//! Each source yields a flat key/value map. The
//! [`RecentReposBuilder`](crate::core::RecentReposBuilder) merges the maps by
//! priority before deserializing a [`TrackerConfig`](crate::core::TrackerConfig).

mod env;
mod file;

pub use env::EnvSource;
pub use file::FileSource;

use crate::error::Result;
use std::collections::HashMap;

/// Priority given to the first file source; later files add 10 each.
pub const FILE_PRIORITY: i32 = 100;

/// Priority given to environment variable sources.
pub const ENV_PRIORITY: i32 = 300;

/// A place tracker settings can be read from.
///
/// Implement this to feed settings from somewhere other than files or
/// environment variables. Loading is synchronous.
pub trait ConfigSource: Send + Sync {
    /// Read the settings this source provides.
    ///
    /// Keys missing from the map keep their value from lower priority
    /// sources, or their default.
    ///
    /// # Errors
    ///
    /// Returns an error if the source exists but cannot be read or parsed.
    fn load(&self) -> Result<HashMap<String, config::Value>>;

    /// Name used in log lines and error messages.
    fn name(&self) -> String;

    /// Precedence of this source; higher values override lower ones.
    fn priority(&self) -> i32 {
        FILE_PRIORITY
    }
}
