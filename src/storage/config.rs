//! Configuration management
//!
//! Endpoint URL, upload type and upload limits stored in a TOML file.
//! Priority: CLI argument > SIGNED_UPLOAD_URL environment variable > config.toml

use super::Result;
use crate::api::client::DEFAULT_TIMEOUT_SECS;
use crate::core::file_type::DEFAULT_FILE_TYPES;
use crate::core::services::upload_service::DEFAULT_MAX_SIZE_MB;
use crate::error::StorageError;
use dirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const URL_ENV: &str = "SIGNED_UPLOAD_URL";
pub const DEFAULT_UPLOAD_TYPE: &str = "default";

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Backend base URL hosting the signing endpoint
    pub url: Option<String>,
    /// Storage category sent as `type` to the signing endpoint
    pub upload_type: Option<String>,
    pub max_size_mb: Option<f64>,
    pub timeout_seconds: Option<u64>,
    /// Accepted extensions for `upload`
    pub accept: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse config file: {}", e),
            })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;

        let app_config_dir = home_dir.join(".config").join("signed-upload");
        let config_file = app_config_dir.join("config.toml");

        Ok(config_file)
    }

    /// Get URL with fallback to environment variable
    pub fn get_url(&self) -> Option<String> {
        self.url
            .clone()
            .or_else(|| std::env::var(URL_ENV).ok().filter(|s| !s.is_empty()))
    }

    pub fn set_url(&mut self, url: String) {
        self.url = Some(url);
    }

    pub fn upload_type(&self) -> String {
        self.upload_type
            .clone()
            .unwrap_or_else(|| DEFAULT_UPLOAD_TYPE.to_string())
    }

    pub fn max_size_mb(&self) -> f64 {
        self.max_size_mb.unwrap_or(DEFAULT_MAX_SIZE_MB)
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    /// Configured accept list, or the default document/image set
    pub fn accept(&self) -> Vec<String> {
        match &self.accept {
            Some(accept) if !accept.is_empty() => accept.clone(),
            _ => DEFAULT_FILE_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
