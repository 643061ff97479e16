use crate::errors::{AppError, AppResult};
use crate::store::{DEFAULT_KEY_LABEL, DEFAULT_VALUE_LABEL, Labels};
use crate::utils::path::expand_to_string;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Sheet file holding the accumulated time per task
    #[serde(default = "default_store")]
    pub store: String,
    /// SQLite file with the running timer and the internal log
    #[serde(default = "default_state_db")]
    pub state_db: String,
    #[serde(default = "default_key_label")]
    pub key_label: String,
    #[serde(default = "default_value_label")]
    pub value_label: String,
    /// Decimals shown when printing hours
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

fn default_store() -> String {
    Config::store_file().to_string_lossy().to_string()
}
fn default_state_db() -> String {
    Config::state_file().to_string_lossy().to_string()
}
fn default_key_label() -> String {
    DEFAULT_KEY_LABEL.to_string()
}
fn default_value_label() -> String {
    DEFAULT_VALUE_LABEL.to_string()
}
fn default_decimals() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            state_db: default_state_db(),
            key_label: default_key_label(),
            value_label: default_value_label(),
            decimals: default_decimals(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timeyourwork")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".timeyourwork")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timeyourwork.conf")
    }

    /// Default location of the sheet
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("timesheet.csv")
    }

    /// Default location of the state database
    pub fn state_file() -> PathBuf {
        Self::config_dir().join("state.sqlite")
    }

    pub fn labels(&self) -> Labels {
        Labels::new(&self.key_label, &self.value_label)
    }

    /// Load configuration from the standard file, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        cfg.store = expand_to_string(&cfg.store);
        cfg.state_db = expand_to_string(&cfg.state_db);
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Write `cfg` as the configuration file.
    /// With `is_test` nothing is written.
    pub fn init_all(cfg: &Config, is_test: bool) -> AppResult<()> {
        if !is_test {
            cfg.save_to(&Self::config_file())?;
        }
        Ok(())
    }
}
