//! Launcher preferences.
//!
//! Preferences live in a TOML file. Every field is optional:
//!
//! ```toml
//! notion_token = "secret_work, secret_home"
//! open_in = "app"
//!
//! [search]
//! timeout_seconds = 5
//! on_all_failed = "error"
//! ```
//!
//! `NOTION_TOKEN` in the environment replaces `notion_token` when set.

use std::path::{Path, PathBuf};

use notion_search::SearchConfig;
use serde::{Deserialize, Serialize};

use crate::error::{LauncherError, Result};
use crate::open::OpenTarget;

/// Environment variable that overrides the configured tokens.
pub const TOKEN_ENV: &str = "NOTION_TOKEN";

/// Launcher preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Comma-separated integration tokens, one per workspace.
    pub notion_token: String,
    /// Where selected results are opened.
    pub open_in: OpenTarget,
    /// Search core settings.
    pub search: SearchConfig,
}

impl LauncherConfig {
    /// Parse preferences from TOML text, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns [`LauncherError::Config`] if the text is not valid TOML for
    /// this schema or the search settings fail validation.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| LauncherError::Config(e.to_string()))?;
        config.search.validate()?;
        Ok(config)
    }

    /// Load preferences from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load from `path`, or from [`Self::default_config_path`] if it exists,
    /// then apply the [`TOKEN_ENV`] override.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given file cannot be read, or any
    /// file found cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::default_config_path();
                if default_path.is_file() {
                    Self::from_file(&default_path)?
                } else {
                    tracing::debug!(path = %default_path.display(), "no config file, using defaults");
                    Self::default()
                }
            }
        };
        Ok(config.with_token_override(std::env::var(TOKEN_ENV).ok()))
    }

    /// Replace the configured tokens when `token` is set and non-blank.
    pub fn with_token_override(mut self, token: Option<String>) -> Self {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.notion_token = token;
        }
        self
    }

    /// Returns the default config file path: `~/.config/notion-launcher/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config)
                .join("notion-launcher")
                .join("config.toml")
        } else if let Some(dir) = dirs::config_dir() {
            dir.join("notion-launcher").join("config.toml")
        } else {
            PathBuf::from("/tmp/notion-launcher/config.toml")
        }
    }
}
