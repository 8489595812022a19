//! Storage layer for signed-upload
//!
//! Handles the TOML configuration file and the API token taken from the
//! environment.

use crate::error::StorageError;

pub mod config;
pub mod credentials;

type Result<T> = std::result::Result<T, StorageError>;
