use crate::core::calculator::days::DayCountMode;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub events_file: String,
    #[serde(default)]
    pub day_count: DayCountMode,
    #[serde(default = "default_max_events_per_cell")]
    pub max_events_per_cell: usize,
    #[serde(default)]
    pub persian_digits: bool,
    #[serde(default = "default_show_gregorian")]
    pub show_gregorian: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teachers_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courses_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes_file: Option<String>,
}

fn default_max_events_per_cell() -> usize {
    3
}
fn default_show_gregorian() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            events_file: Self::events_file().to_string_lossy().to_string(),
            day_count: DayCountMode::default(),
            max_events_per_cell: default_max_events_per_cell(),
            persian_digits: false,
            show_gregorian: default_show_gregorian(),
            teachers_file: None,
            courses_file: None,
            classes_file: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("ragenda")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".ragenda")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ragenda.conf")
    }

    /// Default location of the events JSON
    pub fn events_file() -> PathBuf {
        Self::config_dir().join("events.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            let cfg: Config = serde_yaml::from_str(&content)?;
            cfg.validate()?;
            tracing::debug!(path = %path.display(), "configuration loaded");
            Ok(cfg)
        } else {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Config::default())
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.max_events_per_cell == 0 {
            return Err(AppError::Config(
                "max_events_per_cell must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Initialize the configuration directory and file.
    /// Existing files are left alone unless `force` is set.
    pub fn init_all(events_file: Option<String>, force: bool, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Config::default();
        if let Some(file) = events_file {
            config.events_file = file;
        }

        let path = Self::config_file();
        if !is_test && (force || !path.exists()) {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
        }

        Ok(config)
    }
}
