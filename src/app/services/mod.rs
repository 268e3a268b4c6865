//! Services layer - business operations.
//!
//! - Language registry
//! - Run/Clear output text
//! - Syntax highlighting

pub mod registry;
pub mod runner;
pub mod syntax;
