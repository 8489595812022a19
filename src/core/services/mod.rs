pub mod config_service;
pub mod types;
pub mod upload_service;
