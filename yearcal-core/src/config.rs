//! Global yearcal configuration.

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::{YearCalError, YearCalResult};

static DEFAULT_DATA_FILE: &str = "~/.local/share/yearcal/calendar.json";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn is_default_data_file(p: &PathBuf) -> bool {
    *p == default_data_file()
}

/// Configuration at ~/.config/yearcal/config.toml
///
/// Every key can also be set through a `YEARCAL_` environment variable
/// (e.g. `YEARCAL_DATA_FILE`), which wins over the file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct YearCalConfig {
    #[serde(default = "default_data_file", skip_serializing_if = "is_default_data_file")]
    pub data_file: PathBuf,

    /// Year shown when a command does not name one. Defaults to the current year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl Default for YearCalConfig {
    fn default() -> Self {
        YearCalConfig {
            data_file: default_data_file(),
            year: None,
        }
    }
}

impl YearCalConfig {
    pub fn config_path() -> YearCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| YearCalError::Config("Could not determine config directory".into()))?
            .join("yearcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented-out file on first use.
    pub fn load() -> YearCalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> YearCalResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("YEARCAL"))
            .build()
            .map_err(|e| YearCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| YearCalError::Config(e.to_string()))
    }

    /// Data file path with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn default_year(&self) -> i32 {
        self.year.unwrap_or_else(|| chrono::Local::now().year())
    }

    /// Save to ~/.config/yearcal/config.toml
    pub fn save(&self) -> YearCalResult<()> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                YearCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> YearCalResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| YearCalError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| YearCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> YearCalResult<()> {
        let contents = format!(
            "\
# yearcal configuration

# Where events are stored:
# data_file = \"{}\"

# Year to show when none is given (defaults to the current year):
# year = 2026
",
            DEFAULT_DATA_FILE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                YearCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| YearCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
