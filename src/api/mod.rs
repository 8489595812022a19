//! API layer - signing endpoint client and wire models

pub mod client;
pub mod models;
