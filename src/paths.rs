//! Centralized path definitions for tourgate
//!
//! ## Layout
//!
//! ```text
//! ~/.config/tourgate/
//! └── config.toml               # Validation policy, output preferences
//! ```
//!
//! The config file location can be overridden with the `TOURGATE_CONFIG`
//! environment variable or the `--config` flag.

use std::path::PathBuf;

/// Environment variable overriding the config file path
pub const CONFIG_ENV: &str = "TOURGATE_CONFIG";

/// Directory name under `~/.config`
const APP_DIR: &str = "tourgate";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the global config directory (`~/.config/tourgate`)
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(".config").join(APP_DIR)
}

/// Get the default config file path (`~/.config/tourgate/config.toml`)
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}

/// Get the config file path from `TOURGATE_CONFIG`, if set and non-empty
#[must_use]
pub fn config_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from)
}
