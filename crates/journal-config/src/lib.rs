//! Configuration for the journal app.
//!
//! The config file is optional. It lives at `config.toml` in the platform
//! config directory (for example `~/.config/journal/config.toml` on Linux)
//! and every field falls back to its default when absent.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use journal_core::{AccentTheme, BackgroundStyle};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file name inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Bounds for the redraw cadence, in milliseconds.
const MIN_TICK_RATE_MS: u64 = 10;
const MAX_TICK_RATE_MS: u64 = 500;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// User configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backdrop drawn behind the cards.
    pub background: BackgroundStyle,
    /// Accent palette for the title bar, help keys and sparkle button.
    pub accent: AccentTheme,
    /// Event poll timeout and redraw cadence, in milliseconds.
    pub tick_rate_ms: u64,
    /// Default tracing filter when `JOURNAL_LOG` is unset.
    pub log_level: String,
    /// Lines written on the sticky note.
    pub sticky_note: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background: BackgroundStyle::default(),
            accent: AccentTheme::default(),
            tick_rate_ms: 50,
            log_level: "info".to_string(),
            sticky_note: vec!["Drag me!".to_string(), "✨".to_string()],
        }
    }
}

impl Config {
    /// Platform directories for the app, if a home directory can be found.
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "journal")
    }

    /// Path of the config file, if a home directory can be found.
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load the config from its platform path.
    ///
    /// A missing file (or missing home directory) yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the config from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse a config from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(contents)?;
        config.tick_rate_ms = config.tick_rate_ms.clamp(MIN_TICK_RATE_MS, MAX_TICK_RATE_MS);
        Ok(config)
    }
}
