//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/duplicati-diff-sizes/config.toml` (or the
//! platform-specific equivalent). Configuration file values serve as defaults
//! that can be overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! [compare]
//! repository_url = "ssh://backups.example.org:22/user/machine"
//! database_path = "~/.config/Duplicati/machine.sqlite"
//! newer_version = 0
//! older_version = 1
//! locale = "en"
//! # binary = "duplicati-cli"
//!
//! [report]
//! include_dirs = false
//! verbose = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    /// Comparison options
    #[serde(default)]
    pub compare: FileCompareConfig,

    /// Report options
    #[serde(default)]
    pub report: FileReportConfig,
}

/// Comparison options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileCompareConfig {
    /// Index of the newer snapshot version to compare
    pub newer_version: Option<usize>,

    /// Index of the older snapshot version to compare
    pub older_version: Option<usize>,

    /// Backend URL of the backup repository
    pub repository_url: Option<String>,

    /// Path to the local Duplicati metadata database
    pub database_path: Option<PathBuf>,

    /// Locale forced onto the external command
    pub locale: Option<String>,

    /// The Duplicati CLI binary to invoke
    pub binary: Option<PathBuf>,
}

/// Report options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileReportConfig {
    /// Whether to also report modified directories
    pub include_dirs: Option<bool>,

    /// Whether to print diagnostic output to stderr
    pub verbose: Option<bool>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at
    /// `<config_dir>/duplicati-diff-sizes/config.toml`, where `<config_dir>`
    /// is the platform-specific configuration directory (e.g., `~/.config` on
    /// Linux/macOS, `%APPDATA%` on Windows).
    ///
    /// # Returns
    ///
    /// `Some(PathBuf)` with the config file path, or `None` if the config
    /// directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("duplicati-diff-sizes").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty)
    /// configuration. If the file exists but is malformed, returns an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected fields
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }
}
