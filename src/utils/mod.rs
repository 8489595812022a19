//! Utils module - Shared utilities and helpers
//!
//! This module provides utility functions and helpers that are used across
//! multiple layers of the application architecture.

/// Byte size conversions used by the upload checks
pub mod data;

/// Standardized error conversions
pub mod error_helpers;

/// Tracing setup and verbose console output
pub mod logging;

/// Input validation and sanitization utilities
pub mod validation;
