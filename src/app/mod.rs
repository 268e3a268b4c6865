//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (LanguageId, ViewState, Settings, Messages)
//! - `controllers/` - Orchestration (EditorHost, HighlightController)
//! - `services/` - Language registry, run output, syntax highlighting
//! - `infrastructure/` - Errors and platform detection
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::editor_host::{EditingSurface, EditorHost, SurfaceConfig, SurfaceFactory};
pub use domain::{AppSettings, LanguageId, Message, PanelWidth, Theme, ThemeMode, ViewState};
pub use infrastructure::error::{AppError, Result};
pub use services::runner::{RunOutput, CLEARED_OUTPUT, RUN_ACKNOWLEDGEMENT};
