//! Application configuration.
//!
//! Layering is `defaults < config file < command-line flags`. The file is
//! JSON and optional; nothing here is ever written back.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::theme::ThemeMode;
use crate::view_state::Page;

const APP_DIR: &str = "trackezy";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    #[default]
    Mdy,
    Dmy,
    Ymd,
}

impl DateFormat {
    pub fn label(&self) -> &'static str {
        match self {
            DateFormat::Mdy => "MM/DD/YYYY",
            DateFormat::Dmy => "DD/MM/YYYY",
            DateFormat::Ymd => "YYYY/MM/DD",
        }
    }

    pub fn format(&self, date: NaiveDate) -> String {
        let pattern = match self {
            DateFormat::Mdy => "%m/%d/%Y",
            DateFormat::Dmy => "%d/%m/%Y",
            DateFormat::Ymd => "%Y/%m/%d",
        };
        date.format(pattern).to_string()
    }

    pub fn next(&self) -> Self {
        match self {
            DateFormat::Mdy => DateFormat::Dmy,
            DateFormat::Dmy => DateFormat::Ymd,
            DateFormat::Ymd => DateFormat::Mdy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeMode,
    pub start_page: Page,
    /// Start with the sidebar collapsed.
    pub compact_sidebar: bool,
    pub date_format: DateFormat,
    pub use_24h_time: bool,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
    /// JSON seed replacing the built-in sample data.
    pub seed: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            start_page: Page::default(),
            compact_sidebar: false,
            date_format: DateFormat::default(),
            use_24h_time: false,
            log_level: "info".to_string(),
            log_dir: None,
            seed: None,
        }
    }
}

/// Values given on the command line; `None` leaves the file value alone.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub theme: Option<ThemeMode>,
    pub start_page: Option<Page>,
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
    pub seed: Option<PathBuf>,
}

/// `<config_dir>/trackezy/config.json`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE))
}

/// `<data_local_dir>/trackezy`, falling back to the current directory.
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Config {
    /// Loads the config.
    ///
    /// An explicit `path` must exist. Without one the default location is
    /// tried and a missing file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&data)
            .map_err(|e| AppError::config(format!("invalid {}: {e}", path.display())))
    }

    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        if let Some(page) = overrides.start_page {
            self.start_page = page;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if overrides.log_dir.is_some() {
            self.log_dir = overrides.log_dir;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(default_log_dir)
    }
}
