use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{DayHours, TieBreak};
use crate::errors::{AppError, AppResult};
use crate::models::ViewMode;
use crate::utils::path::expand_tilde;

pub mod check;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default)]
    pub default_view: ViewMode,
    #[serde(default = "default_day_start_hour")]
    pub day_start_hour: u32,
    #[serde(default = "default_day_end_hour")]
    pub day_end_hour: u32,
    #[serde(default)]
    pub holiday_tie_break: TieBreak,
    #[serde(default = "default_true")]
    pub upcoming_only: bool,
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_data_file() -> String {
    "~/.walkcal/snapshot.json".to_string()
}
fn default_day_start_hour() -> u32 {
    6
}
fn default_day_end_hour() -> u32 {
    21
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            default_view: ViewMode::default(),
            day_start_hour: default_day_start_hour(),
            day_end_hour: default_day_end_hour(),
            holiday_tie_break: TieBreak::default(),
            upcoming_only: default_true(),
            color: default_true(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".walkcal")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("walkcal.conf")
    }

    /// Load configuration from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.day_start_hour > 23 || self.day_end_hour > 23 {
            return Err(AppError::Config(format!(
                "day hours must be within 0-23 (got {}-{})",
                self.day_start_hour, self.day_end_hour
            )));
        }
        if self.day_start_hour > self.day_end_hour {
            return Err(AppError::Config(format!(
                "day_start_hour ({}) is after day_end_hour ({})",
                self.day_start_hour, self.day_end_hour
            )));
        }
        Ok(())
    }

    pub fn day_hours(&self) -> DayHours {
        DayHours {
            start: self.day_start_hour,
            end: self.day_end_hour,
        }
    }

    /// Snapshot location with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }
}
