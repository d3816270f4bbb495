use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Default snapshot file read by the CLI.
    #[serde(default = "default_snapshot")]
    pub snapshot: String,
    /// Used when the snapshot does not say whether weekends are shown.
    #[serde(default)]
    pub display_weekend: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_snapshot() -> String {
    Config::snapshot_file().to_string_lossy().to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot: default_snapshot(),
            display_weekend: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rtimegrid`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rtimegrid")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimegrid.conf")
    }

    /// Return the default snapshot path
    pub fn snapshot_file() -> PathBuf {
        Self::config_dir().join("snapshot.json")
    }

    /// Load configuration from the standard location, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(content)?;
        if cfg.log_level.trim().is_empty() {
            return Err(AppError::Config("log_level must not be empty".to_string()));
        }
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Snapshot path with `~/` expanded.
    pub fn snapshot_path(&self) -> PathBuf {
        expand_tilde(&self.snapshot)
    }
}
