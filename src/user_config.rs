//! User-level configuration loaded from `~/.gitpoint/config.toml`.
//!
//! The file is optional; if it does not exist all fields fall back to their
//! `Default` values. `GITPOINT_CONFIG` points the loader at another file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::git::{BlameRef, ProcessGit};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "GITPOINT_CONFIG";

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse user config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// How git is invoked (`[git]` table).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Git executable, looked up on `PATH` when not absolute.
    pub program: String,
    /// Upper bound for a single git call; unbounded when absent.
    pub timeout_secs: Option<u64>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            timeout_secs: None,
        }
    }
}

impl GitConfig {
    /// Build the git provider this section describes.
    #[must_use]
    pub fn provider(&self) -> ProcessGit {
        ProcessGit::new(self.program.clone(), self.timeout_secs.map(Duration::from_secs))
    }
}

/// Link generation settings (`[links]` table).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LinksConfig {
    /// Commit blame links point at: `"remote"` or `"head"`.
    pub blame_ref: BlameRef,
}

/// Output settings (`[output]` table).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Print URLs to stdout instead of using the clipboard or browser.
    pub print_only: bool,
}

/// Top-level user configuration.
///
/// All fields are optional at the TOML level; missing fields resolve to their
/// `Default` values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct UserConfig {
    pub git: GitConfig,
    pub links: LinksConfig,
    pub output: OutputConfig,
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Resolve the path of the user config file.
///
/// `GITPOINT_CONFIG` wins; otherwise `~/.gitpoint/config.toml`, next to the
/// `logs/` directory.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|h| h.join(".gitpoint").join("config.toml"))
}

/// Load the user configuration.
///
/// Returns `Ok(UserConfig::default())` if no file exists so callers never
/// need to handle the "absent file" case specially.
pub fn load_user_config() -> Result<UserConfig, UserConfigError> {
    match user_config_path() {
        Some(path) => load_user_config_from(&path),
        None => {
            debug!("Could not determine user config directory; using defaults");
            Ok(UserConfig::default())
        }
    }
}

/// Load the user configuration from an explicit path.
pub fn load_user_config_from(path: &Path) -> Result<UserConfig, UserConfigError> {
    if !path.exists() {
        debug!("User config not found at {}; using defaults", path.display());
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: UserConfig = toml::from_str(&content)?;
    debug!("Loaded user config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "user_config_tests.rs"]
mod tests;
