//! Infrastructure layer - external integrations and utilities.
//!
//! - Error types
//! - Platform-specific dark mode detection

pub mod error;
pub mod platform;
