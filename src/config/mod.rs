use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Fields every configuration file is expected to contain.
pub const CONFIG_FIELDS: [&str; 4] = [
    "gap_threshold",
    "timestamp_interval",
    "output_prefix",
    "indent",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default for `remove-gaps --gap` (seconds)
    #[serde(default = "default_gap_threshold")]
    pub gap_threshold: u32,
    /// Default for `add-timestamps --interval` (seconds)
    #[serde(default = "default_timestamp_interval")]
    pub timestamp_interval: u32,
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_gap_threshold() -> u32 {
    15
}
fn default_timestamp_interval() -> u32 {
    15
}
fn default_output_prefix() -> String {
    "fixed_".to_string()
}
fn default_indent() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gap_threshold: default_gap_threshold(),
            timestamp_interval: default_timestamp_interval(),
            output_prefix: default_output_prefix(),
            indent: default_indent(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("gpxfix")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".gpxfix")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("gpxfix.conf")
    }

    /// Config file to use: the `--config` override or the default location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => crate::utils::path::expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write this configuration to `path`, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }
        let yaml = self.to_yaml()?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Names of the expected fields absent from the YAML text.
    pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        let map = value.as_mapping();

        Ok(CONFIG_FIELDS
            .iter()
            .copied()
            .filter(|field| {
                map.is_none_or(|m| !m.contains_key(*field))
            })
            .collect())
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.timestamp_interval == 0 {
            return Err(AppError::Config(
                "timestamp_interval must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
