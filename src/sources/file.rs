//! File-based settings source.

use super::{ConfigSource, FILE_PRIORITY};
use crate::error::{Result, TrackerError};
use config::{File, FileFormat};
use std::collections::HashMap;
use std::path::PathBuf;

/// Reads tracker settings from a YAML, TOML or JSON file.
///
/// The format is picked from the file extension. Files are required unless
/// marked [`optional`](FileSource::optional), in which case a missing file
/// contributes nothing.
///
/// # Examples
///
/// ```rust,no_run
/// use recent_repos::sources::FileSource;
///
/// let defaults = FileSource::new("recent.toml");
/// let local = FileSource::new("recent.local.yaml").optional().with_priority(110);
/// ```
pub struct FileSource {
    path: PathBuf,
    priority: i32,
    required: bool,
}

impl FileSource {
    /// Create a required file source.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            priority: FILE_PRIORITY,
            required: true,
        }
    }

    /// Set the priority for this source.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Allow the file to be absent.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    fn format(&self) -> Result<FileFormat> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                TrackerError::LoadError(format!(
                    "Unable to determine file format for: {}",
                    self.path.display()
                ))
            })?;

        match extension {
            "yaml" | "yml" => Ok(FileFormat::Yaml),
            "toml" => Ok(FileFormat::Toml),
            "json" => Ok(FileFormat::Json),
            other => Err(TrackerError::LoadError(format!(
                "Unsupported file extension: {}. Supported: .yaml, .yml, .toml, .json",
                other
            ))),
        }
    }
}

impl ConfigSource for FileSource {
    fn load(&self) -> Result<HashMap<String, config::Value>> {
        let format = self.format()?;

        if !self.path.exists() {
            if self.required {
                return Err(TrackerError::LoadError(format!(
                    "Configuration file not found: {}",
                    self.path.display()
                )));
            }
            return Ok(HashMap::new());
        }

        config::Config::builder()
            .add_source(File::from(self.path.clone()).format(format))
            .build()
            .map_err(|e| TrackerError::LoadError(format!("Failed to load file: {}", e)))?
            .try_deserialize::<HashMap<String, config::Value>>()
            .map_err(|e| TrackerError::DeserializationError(format!("Failed to parse file: {}", e)))
    }

    fn name(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_extension() {
        assert!(matches!(FileSource::new("recent.yaml").format(), Ok(FileFormat::Yaml)));
        assert!(matches!(FileSource::new("recent.yml").format(), Ok(FileFormat::Yaml)));
        assert!(matches!(FileSource::new("recent.toml").format(), Ok(FileFormat::Toml)));
        assert!(matches!(FileSource::new("recent.json").format(), Ok(FileFormat::Json)));
        assert!(FileSource::new("recent.txt").format().is_err());
        assert!(FileSource::new("recent").format().is_err());
    }

    #[test]
    fn test_load_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("recent.toml");
        fs::write(&path, "capacity = 4\n").unwrap();

        let values = FileSource::new(&path).load().unwrap();
        assert!(values.contains_key("capacity"));
    }

    #[test]
    fn test_missing_required_file() {
        let source = FileSource::new("/nonexistent/recent.yaml");
        assert!(matches!(source.load(), Err(TrackerError::LoadError(_))));
    }

    #[test]
    fn test_missing_optional_file() {
        let source = FileSource::new("/nonexistent/recent.yaml").optional();
        assert!(source.load().unwrap().is_empty());
    }

    #[test]
    fn test_priority_and_name() {
        let source = FileSource::new("recent.yaml").with_priority(200);
        assert_eq!(source.priority(), 200);
        assert!(source.name().contains("recent.yaml"));
    }
}
