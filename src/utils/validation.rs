//! Input validation and sanitization utilities
//!
//! This module provides utilities for validating user input and
//! configuration values before they reach the upload flow.

use crate::error::{CliError, UtilsError};

/// Validate that a URL is properly formatted
pub fn validate_url(url: &str) -> crate::Result<()> {
    if url.is_empty() {
        return Err(CliError::InvalidArguments("URL cannot be empty".to_string()).into());
    }

    // Basic URL validation - must start with http:// or https://
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(CliError::InvalidArguments(format!(
            "Invalid URL '{}': URL must start with http:// or https://",
            url
        ))
        .into());
    }

    Ok(())
}

/// Validate an upload type sent to the signing endpoint
pub fn validate_upload_type(upload_type: &str) -> crate::Result<()> {
    if upload_type.trim().is_empty() {
        return Err(UtilsError::Validation {
            message: "Upload type cannot be empty".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Validate a maximum size in megabytes
pub fn validate_max_size(max_size_mb: f64) -> crate::Result<()> {
    if !max_size_mb.is_finite() || max_size_mb <= 0.0 {
        return Err(UtilsError::Validation {
            message: format!("Maximum size must be a positive number, got {}", max_size_mb),
        }
        .into());
    }
    Ok(())
}

/// Split a comma separated accept list, trimming blanks
pub fn parse_accept_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
