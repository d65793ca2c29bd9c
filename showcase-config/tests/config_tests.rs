//! Integration tests for config and profile file loading.

use showcase_config::{Config, ConfigError, LogLevel, UserProfile};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_creates_default_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config, Config::default());
    assert!(path.exists(), "default config should be written");
    assert!(!path.with_extension("yaml.tmp").exists());
}

#[test]
fn test_save_then_load_keeps_overrides() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");

    let config = Config {
        skill_catalog: vec!["Rust".into(), "Zig".into()],
        submit_route: "/gallery".into(),
        log_level: LogLevel::Debug,
        ..Default::default()
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.skill_catalog, vec!["Rust", "Zig"]);
    assert_eq!(loaded.submit_route, "/gallery");
    assert_eq!(loaded.log_level, LogLevel::Debug);
}

#[test]
fn test_invalid_yaml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "skill_catalog: [unclosed\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Parse(_))
    ));
}

#[test]
fn test_blank_catalog_entry_is_validation_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "skill_catalog:\n  - Rust\n  - '  '\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Validation(_))
    ));
}

#[test]
fn test_profile_file_loads_camel_case_projects() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profile.yaml");
    fs::write(
        &path,
        r#"
name: Ada Lovelace
title: Analyst
email: ada@example.com
skills: [Python, Rust]
projects:
  - id: p1
    title: Engine
    description: Difference engine notes
    image: https://example.com/engine.png
    author: { name: Ada Lovelace, avatar: "" }
    createdAt: "1843-09-01"
"#,
    )
    .unwrap();

    let profile = UserProfile::load_from_file(&path).unwrap();
    assert_eq!(profile.name, "Ada Lovelace");
    assert_eq!(profile.skills, vec!["Python", "Rust"]);
    assert_eq!(profile.projects.len(), 1);
    assert_eq!(profile.projects[0].created_at, "1843-09-01");
}

#[test]
fn test_missing_profile_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = UserProfile::load_from_file(&dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
