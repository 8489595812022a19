//! Configuration service for managing application configuration

use crate::AppError;
use crate::error::ConfigError;
use crate::storage::config::Config;
use crate::utils::validation::{
    parse_accept_list, validate_max_size, validate_upload_type, validate_url,
};
use std::path::PathBuf;

/// Configuration service for managing application configuration
pub struct ConfigService {
    config: Config,
}

impl ConfigService {
    /// Create new ConfigService instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Set a field by its user-facing name
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), AppError> {
        match field {
            "url" => {
                validate_url(value)?;
                self.config.set_url(value.trim_end_matches('/').to_string());
            }
            "upload-type" => {
                validate_upload_type(value)?;
                self.config.upload_type = Some(value.to_string());
            }
            "max-size" => {
                let max_size = parse_field::<f64>(field, value)?;
                validate_max_size(max_size)?;
                self.config.max_size_mb = Some(max_size);
            }
            "timeout" => {
                let timeout = parse_field::<u64>(field, value)?;
                self.config.timeout_seconds = Some(timeout);
            }
            "accept" => {
                self.config.accept = Some(parse_accept_list(value));
            }
            _ => {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: value.to_string(),
                    reason: "Unknown field. Use url, upload-type, max-size, timeout or accept"
                        .to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Save configuration to file
    pub fn save_config(&self, path: Option<PathBuf>) -> Result<(), AppError> {
        self.config.save(path).map_err(|e| e.into())
    }
}

fn parse_field<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, AppError> {
    value.trim().parse::<T>().map_err(|_| {
        ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "not a number".to_string(),
        }
        .into()
    })
}
