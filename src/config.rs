//! User configuration
//!
//! Personal preferences, stored at `~/.config/repolink/config.toml` (or the
//! platform equivalent) and never checked into a repository.
//!
//! ```toml
//! # Remote whose address is turned into a web URL
//! remote = "upstream"
//!
//! # Entry that marks a repository root
//! marker = ".git"
//!
//! # Open the URL in a browser without passing --open
//! open = true
//!
//! # Command used instead of the platform opener; the URL is appended
//! browser = "firefox --new-tab"
//! ```
//!
//! Config file location:
//! - Linux: `$XDG_CONFIG_HOME/repolink/config.toml` or `~/.config/repolink/config.toml`
//! - macOS: `$XDG_CONFIG_HOME/repolink/config.toml` or `~/.config/repolink/config.toml`
//! - Windows: `%APPDATA%\repolink\config.toml`

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};
use serde::{Deserialize, Serialize};

use crate::git::{DEFAULT_REMOTE, GIT_MARKER};

/// Environment variable naming an explicit config file (also used by tests).
pub const CONFIG_PATH_ENV: &str = "REPOLINK_CONFIG_PATH";

/// Config path set by the `--config` flag.
static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Use `path` as the config file for this process.
///
/// Call once from main() when `--config` is given.
pub fn set_config_path(path: PathBuf) {
    CONFIG_PATH.set(path).ok();
}

/// Location of the user config file.
///
/// Priority: `--config` flag, then `REPOLINK_CONFIG_PATH`, then the platform
/// config directory.
pub fn get_config_path() -> Option<PathBuf> {
    if let Some(path) = CONFIG_PATH.get() {
        return Some(path.clone());
    }

    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }

    // choose_base_strategy uses:
    // - XDG on Linux (respects XDG_CONFIG_HOME, falls back to ~/.config)
    // - XDG on macOS (~/.config instead of ~/Library/Application Support)
    // - Windows conventions on Windows (%APPDATA%)
    let strategy = choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("repolink").join("config.toml"))
}

/// Whether the config path was named explicitly rather than defaulted.
fn is_config_path_explicit() -> bool {
    CONFIG_PATH.get().is_some() || std::env::var_os(CONFIG_PATH_ENV).is_some()
}

/// User-level configuration.
///
/// Unset values are `None` so getters can tell "explicitly set" from "default".
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct UserConfig {
    /// Remote whose address is resolved (default `origin`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,

    /// Directory entry marking a repository root (default `.git`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,

    /// Open the resolved URL in a browser by default
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub open: bool,

    /// Shell command used to open URLs instead of the platform opener
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser: Option<String>,
}

impl UserConfig {
    /// Load configuration from the config file, if one exists.
    ///
    /// A missing file yields defaults. A file that can't be read or parsed is
    /// an error naming the file.
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = get_config_path() else {
            log::debug!("No config directory available; using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            if is_config_path_explicit() {
                crate::styling::eprintln!(
                    "{}",
                    crate::styling::warning_message(format!(
                        "Config file not found: {}",
                        crate::path::format_path_for_display(&path)
                    ))
                );
            }
            log::debug!("Config file {} not found; using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::load_from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn load_from_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if let Some(remote) = &self.remote
            && remote.trim().is_empty()
        {
            anyhow::bail!("`remote` must not be empty");
        }
        if let Some(marker) = &self.marker
            && (marker.is_empty() || marker.contains(['/', '\\']))
        {
            anyhow::bail!("`marker` must be a single file or directory name, got {marker:?}");
        }
        if let Some(browser) = &self.browser
            && browser.trim().is_empty()
        {
            anyhow::bail!("`browser` must not be empty");
        }
        Ok(())
    }

    pub fn remote(&self) -> &str {
        self.remote.as_deref().unwrap_or(DEFAULT_REMOTE)
    }

    pub fn marker(&self) -> &str {
        self.marker.as_deref().unwrap_or(GIT_MARKER)
    }

    pub fn browser(&self) -> Option<&str> {
        self.browser.as_deref()
    }
}
