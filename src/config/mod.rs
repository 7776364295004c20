use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;

pub const CONFIG_DIR: &str = ".config/tstamp";
pub const CONFIG_FILENAME: &str = "tstamp.conf";
pub const STORE_FILENAME: &str = "timestamps.csv";

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Record store path; defaults to `~/.config/tstamp/timestamps.csv`
    #[serde(default)]
    pub store: Option<String>,
    /// Editor for `tstamp edit`, before $EDITOR / $VISUAL
    #[serde(default)]
    pub editor: Option<String>,
    /// Ask before `reset` wipes records
    #[serde(default = "default_confirm_destructive")]
    pub confirm_destructive: bool,
}

fn default_confirm_destructive() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: None,
            editor: None,
            confirm_destructive: default_confirm_destructive(),
        }
    }
}

impl Config {
    /// `~/.config/tstamp`
    pub fn config_dir() -> AppResult<PathBuf> {
        let home = dirs::home_dir().ok_or(AppError::HomeDirNotFound)?;
        Ok(home.join(CONFIG_DIR))
    }

    pub fn config_file() -> AppResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILENAME))
    }

    /// Load configuration from file, or return defaults if there is none.
    pub fn load() -> AppResult<Self> {
        let path = match Self::config_file() {
            Ok(p) if p.exists() => p,
            _ => return Ok(Self::default()),
        };

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        debug!("loaded configuration from {}", path.display());
        Ok(cfg)
    }

    /// Resolved record store path.
    pub fn store_path(&self) -> AppResult<PathBuf> {
        match &self.store {
            Some(p) => Ok(expand_tilde(p)),
            None => Ok(Self::config_dir()?.join(STORE_FILENAME)),
        }
    }
}
