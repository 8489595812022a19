//! # signed-upload
//!
//! Upload helpers for files that go to object storage through
//! backend-signed URLs, plus the file-type and data-URL helpers an
//! upload widget needs.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use signed_upload::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> signed_upload::Result<()> {
//!     let client = UploadClient::new("https://api.example.test".to_string())?;
//!     let service = UploadService::new(client, "avatar", ConsoleNotifier::new(), PathPicker::default());
//!
//!     let bytes = tokio::fs::read("photo.png").await.unwrap();
//!     let uploaded = service.upload(bytes, "png").await?;
//!     println!("{}", uploaded.file_path);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │           API Layer                 │  signing endpoint client, signed PUT, models
//! ├─────────────────────────────────────┤
//! │          Core Layer                 │  upload service, type checks, data URLs, host traits
//! ├─────────────────────────────────────┤
//! │        Storage Layer                │  configuration file, token from environment
//! ├─────────────────────────────────────┤
//! │         Utils Layer                 │  logging, validation, size helpers
//! └─────────────────────────────────────┘
//! ```

pub use error::AppError;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::Result;
    pub use crate::error::AppError;

    pub use crate::api::client::UploadClient;
    pub use crate::api::models::{SignUploadUrlResponse, UploadedFile};

    pub use crate::core::file_type::{check_file_type, check_picture_type};
    pub use crate::core::host::{ConsoleNotifier, FilePicker, Notifier, PathPicker};
    pub use crate::core::services::upload_service::UploadService;

    pub use crate::storage::config::Config;
}

/// Main architecture layers (dependency flow: CLI → Core → Storage)
pub mod cli; // Command-line interface
pub mod core; // Upload flow and widget helpers
pub mod storage; // Configuration and credentials

/// Support modules (used across layers)
pub mod api; // Signing endpoint client
pub mod display; // Output formatting
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub type Result<T> = std::result::Result<T, AppError>;
