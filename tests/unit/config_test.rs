//! Tests for configuration loading and saving

use std::fs;
use std::path::Path;

use serial_test::serial;
use tempfile::TempDir;
use tourgate::config::{Config, ConfigError};
use tourgate::paths;

// =============================================================================
// BASIC CONFIG TESTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.policy.require_phone);
    assert!(!config.output.json);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_policy() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[policy]\nrequire_phone = true\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(config.policy.require_phone);
    assert!(!config.output.json);
}

#[test]
fn test_empty_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_invalid_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[policy]\nrequire_phone = \"sometimes\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

// =============================================================================
// SAVE TESTS
// =============================================================================

#[test]
fn test_save_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("tourgate").join("config.toml");

    let mut config = Config::default();
    config.output.json = true;
    config.save_to(&path).unwrap();

    assert!(path.exists());
    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_to_toml_has_sections() {
    let toml = Config::default().to_toml().unwrap();
    assert!(toml.contains("[policy]"));
    assert!(toml.contains("require_phone = false"));
    assert!(toml.contains("[output]"));
}

// =============================================================================
// PATH RESOLUTION TESTS
// =============================================================================

#[test]
#[serial(env)]
fn test_explicit_path_wins() {
    let explicit = Path::new("/tmp/explicit.toml");
    assert_eq!(Config::resolve_path(Some(explicit)), explicit);
}

#[test]
#[serial(env)]
fn test_env_path_used() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("from-env.toml");
    fs::write(&path, "[output]\njson = true\n").unwrap();

    // SAFETY: serialized with the other env tests
    unsafe { std::env::set_var(paths::CONFIG_ENV, &path) };
    let resolved = Config::resolve_path(None);
    let config = Config::load(None);
    unsafe { std::env::remove_var(paths::CONFIG_ENV) };

    assert_eq!(resolved, path);
    assert!(config.unwrap().output.json);
}

#[test]
#[serial(env)]
fn test_default_path() {
    // SAFETY: serialized with the other env tests
    unsafe { std::env::remove_var(paths::CONFIG_ENV) };
    assert_eq!(Config::resolve_path(None), paths::global_config());
    assert!(paths::global_config().ends_with(".config/tourgate/config.toml"));
}
