use std::env;
use std::fs;
use std::path::{ Path, PathBuf };

use log::debug;
use serde::{ Deserialize, Serialize };
use thiserror::Error;

use crate::errors::{ CalcEstateError, CalcResult };
use crate::implementations::favorites::LIKED_RATIOS_KEY;
use crate::implementations::property_store::PROPERTIES_KEY;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "CALCESTATE_DATA_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("No data directory could be determined; set {0} or pass --data-dir")]
    NoDataDir(String),
}

impl From<ConfigError> for CalcEstateError {
    fn from(err: ConfigError) -> Self {
        CalcEstateError::ConfigError(err.to_string())
    }
}

/// Configuration for CalcEstate
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default, rename_all = "snake_case")]
pub struct CalcEstateConfig {
    /// Directory holding the persisted JSON documents
    pub data_dir: Option<PathBuf>,

    /// Storage key of the properties document
    pub properties_key: String,

    /// Storage key of the liked ratio ids document
    pub liked_ratios_key: String,

    /// Default log level when none is given on the command line
    pub log_level: Option<String>,
}

impl Default for CalcEstateConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            properties_key: PROPERTIES_KEY.to_string(),
            liked_ratios_key: LIKED_RATIOS_KEY.to_string(),
            log_level: None,
        }
    }
}

impl CalcEstateConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: CalcEstateConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load the file at `path` if one was given, otherwise the defaults
    pub fn load(path: Option<&Path>) -> CalcResult<Self> {
        match path {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Ok(Self::from_file(path)?)
            }
            None => Ok(Self::default()),
        }
    }

    /// Resolve the data directory: explicit override, then `CALCESTATE_DATA_DIR`,
    /// then the config file, then `~/.calcestate`
    pub fn resolve_data_dir(&self, override_dir: Option<&Path>) -> Result<PathBuf, ConfigError> {
        let env_dir = env::var(DATA_DIR_ENV).ok();
        let home = env::var("HOME").or_else(|_| env::var("USERPROFILE")).ok();
        self.resolve_data_dir_from(override_dir, env_dir.as_deref(), home.as_deref())
    }

    pub(crate) fn resolve_data_dir_from(
        &self,
        override_dir: Option<&Path>,
        env_dir: Option<&str>,
        home: Option<&str>
    ) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = override_dir {
            debug!("Using data directory from command line");
            return Ok(dir.to_path_buf());
        }
        if let Some(dir) = env_dir.filter(|d| !d.trim().is_empty()) {
            debug!("Using data directory from {}", DATA_DIR_ENV);
            return Ok(PathBuf::from(dir));
        }
        if let Some(dir) = &self.data_dir {
            debug!("Using data directory from config file");
            return Ok(dir.clone());
        }
        match home {
            Some(home) => Ok(PathBuf::from(home).join(".calcestate")),
            None => Err(ConfigError::NoDataDir(DATA_DIR_ENV.to_string())),
        }
    }
}
