//! Integration tests for configuring the tracker from files and environment.

#![allow(unsafe_code)] // For env var manipulation in tests

use recent_repos::prelude::*;
use recent_repos::sources::FileSource;
use std::env;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_capacity_from_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("recent.yaml");
    fs::write(&path, "capacity: 3\n").unwrap();

    let mut repos: RecentRepos<()> = RecentRepos::builder().with_file(&path).build().unwrap();
    assert_eq!(repos.recent().capacity(), 3);

    for name in ["a", "b", "c", "d"] {
        repos.add(name, format!("https://github.com/user/{name}"));
    }
    assert_eq!(repos.list(None).len(), 3);
}

#[test]
fn test_later_file_overrides_earlier() {
    let temp_dir = TempDir::new().unwrap();
    let defaults = temp_dir.path().join("recent.toml");
    let local = temp_dir.path().join("recent.local.json");
    fs::write(&defaults, "capacity = 4\n").unwrap();
    fs::write(&local, r#"{"capacity": 8}"#).unwrap();

    let config = RecentRepos::builder()
        .with_file(&defaults)
        .with_file(&local)
        .load_config()
        .unwrap();
    assert_eq!(config.capacity, 8);
}

#[test]
fn test_file_without_capacity_uses_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("recent.yaml");
    fs::write(&path, "unrelated: true\n").unwrap();

    let config = RecentRepos::builder().with_file(&path).load_config().unwrap();
    assert_eq!(config.capacity, 10);
}

#[test]
fn test_env_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("recent.yaml");
    fs::write(&path, "capacity: 3\n").unwrap();

    unsafe {
        env::set_var("RECENT_IT_ENV_CAPACITY", "12");
    }

    let config = RecentRepos::builder()
        .with_file(&path)
        .with_env_overrides("RECENT_IT_ENV", "__")
        .load_config();

    unsafe {
        env::remove_var("RECENT_IT_ENV_CAPACITY");
    }

    assert_eq!(config.unwrap().capacity, 12);
}

#[test]
fn test_explicit_capacity_overrides_sources() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("recent.yaml");
    fs::write(&path, "capacity: 3\n").unwrap();

    let repos: RecentRepos<()> = RecentRepos::builder()
        .with_file(&path)
        .with_capacity(5)
        .build()
        .unwrap();
    assert_eq!(repos.recent().capacity(), 5);
}

#[test]
fn test_optional_custom_source() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.yaml");

    let config = RecentRepos::builder()
        .with_source(FileSource::new(&missing).optional())
        .load_config()
        .unwrap();
    assert_eq!(config, TrackerConfig::default());
}

#[test]
fn test_missing_file_fails() {
    let result: Result<RecentRepos<()>> = RecentRepos::builder()
        .with_file("/nonexistent/recent.yaml")
        .build();
    assert!(matches!(result, Err(TrackerError::LoadError(_))));
}

#[test]
fn test_zero_capacity_in_file_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("recent.yaml");
    fs::write(&path, "capacity: 0\n").unwrap();

    let err = RecentRepos::builder()
        .with_file(&path)
        .load_config()
        .unwrap_err();
    assert!(matches!(err, TrackerError::ValidationError(_)));
    assert!(err.to_string().contains("capacity"));
}
