//! Domain layer - core data structures and types.
//!
//! - Language ids
//! - View state (language, output panel, theme)
//! - Startup settings
//! - Message types for the event system

pub mod language;
pub mod messages;
pub mod settings;
pub mod view_state;

pub use language::LanguageId;
pub use messages::Message;
pub use settings::{AppSettings, FontChoice, SyntaxTheme, ThemeMode};
pub use view_state::{PanelWidth, Theme, ViewState};
