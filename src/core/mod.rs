//! Core layer - upload flow and widget helpers

/// Accept-string and help-text derivation
pub mod accept;

/// Extension to MIME type lookup
pub mod content_type;

/// Base64 data URLs
pub mod data_url;

/// Extension checks with default sets
pub mod file_type;

/// Host runtime seams (notices, pickers, image probe)
pub mod host;

/// Upload service and its parameter types
pub mod services;
