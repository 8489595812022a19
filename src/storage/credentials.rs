//! API token management
//!
//! The signing endpoint token comes from the SIGNED_UPLOAD_TOKEN environment
//! variable; nothing is persisted.

use std::env;

pub const TOKEN_ENV: &str = "SIGNED_UPLOAD_TOKEN";

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Get the token from the environment, ignoring empty values
pub fn get_token() -> Option<String> {
    non_empty(env::var(TOKEN_ENV).ok())
}

/// Effective token: explicit argument first, then the environment
pub fn resolve_token(explicit: Option<String>) -> Option<String> {
    non_empty(explicit).or_else(get_token)
}
