//! Configuration module for the mlscan CLI.
//!
//! Loads and saves `mlscan.toml`, which holds default output settings and
//! the scanner options.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use dirs::{config_dir, home_dir};
use minilua_lex::ScanOptions;
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};

use crate::error::{MlscanError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "mlscan.toml";

/// How `mlscan tokens` prints a token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `[TAG] text` line per token
    #[default]
    Listing,
    /// A JSON array of token objects
    Json,
    /// `{:?}` of every token, end of file included
    Debug,
}

impl OutputFormat {
    /// Name used on the command line and in the config file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Listing => "listing",
            Self::Json => "json",
            Self::Debug => "debug",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = MlscanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "listing" => Ok(Self::Listing),
            "json" => Ok(Self::Json),
            "debug" => Ok(Self::Debug),
            other => Err(MlscanError::Validation(format!("Unknown format: {}", other))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Default output format for `tokens`.
    #[serde(default)]
    pub format: OutputFormat,

    /// Worker threads for `check`.
    #[serde(default = "default_jobs")]
    pub jobs: usize,

    /// Scanner options.
    #[serde(default)]
    pub scan: ScanOptions,
}

fn default_jobs() -> usize {
    get_num_cpus()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            format: OutputFormat::default(),
            jobs: default_jobs(),
            scan: ScanOptions::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/mlscan/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MlscanError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            MlscanError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        if config.jobs == 0 {
            return Err(MlscanError::Config("jobs must be at least 1".to_string()));
        }

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a specific path.
    #[allow(dead_code)]
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            MlscanError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("mlscan").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("mlscan").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
