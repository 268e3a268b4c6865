use super::language::LanguageId;

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks only send these; `AppState::handle` does the work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    // Sidebar
    SelectLanguage(LanguageId),

    // Toolbar
    Run,
    Clear,
    ToggleTheme,

    // Output panel
    ResizeOutput(i32),

    // Editor
    BufferModified,
    Rehighlight,

    WindowClose,
}
