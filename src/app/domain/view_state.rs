//! In-memory UI state for one window session.
//!
//! Everything here lives for as long as the window is open and is never
//! written back to disk. Handlers get the state by `&mut` so the transitions
//! can be exercised without a display.

use super::language::LanguageId;
use crate::app::services::runner::{self, RunOutput, CLEARED_OUTPUT, RUN_ACKNOWLEDGEMENT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Output panel width in pixels, always within `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PanelWidth(i32);

impl PanelWidth {
    pub const MIN: i32 = 300;
    pub const MAX: i32 = 600;
    pub const INITIAL: i32 = 400;

    pub fn new(px: i32) -> Self {
        Self(px.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl Default for PanelWidth {
    fn default() -> Self {
        Self(Self::INITIAL)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    language: LanguageId,
    output_width: PanelWidth,
    output: String,
    theme: Theme,
    run_mode: RunOutput,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            language: LanguageId::default(),
            output_width: PanelWidth::default(),
            output: RUN_ACKNOWLEDGEMENT.to_string(),
            theme: Theme::default(),
            run_mode: RunOutput::default(),
        }
    }
}

impl ViewState {
    pub fn new(language: LanguageId, output_width: i32, theme: Theme, run_mode: RunOutput) -> Self {
        Self {
            language,
            output_width: PanelWidth::new(output_width),
            theme,
            run_mode,
            ..Self::default()
        }
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    pub fn output_width(&self) -> PanelWidth {
        self.output_width
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn run_mode(&self) -> RunOutput {
        self.run_mode
    }

    /// Returns `true` when the language actually changed, i.e. the editor
    /// has to be rebuilt.
    pub fn select_language(&mut self, language: LanguageId) -> bool {
        if self.language == language {
            return false;
        }
        self.language = language;
        true
    }

    /// `buffer_text` is `None` when no editor is mounted; output is left as is.
    pub fn run(&mut self, buffer_text: Option<&str>) {
        if let Some(text) = buffer_text {
            self.output = runner::run_output(self.run_mode, text);
        }
    }

    pub fn clear(&mut self) {
        self.output = CLEARED_OUTPUT.to_string();
    }

    pub fn resize_output(&mut self, requested: i32) -> PanelWidth {
        self.output_width = PanelWidth::new(requested);
        self.output_width
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ViewState::default();
        assert_eq!(state.language(), LanguageId::JavaScript);
        assert_eq!(state.output_width().get(), 400);
        assert_eq!(state.output(), "Code Execution Successful!");
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(state.run_mode(), RunOutput::Static);
    }

    #[test]
    fn test_panel_width_clamps() {
        assert_eq!(PanelWidth::new(0).get(), 300);
        assert_eq!(PanelWidth::new(-50).get(), 300);
        assert_eq!(PanelWidth::new(450).get(), 450);
        assert_eq!(PanelWidth::new(601).get(), 600);
        assert_eq!(PanelWidth::new(i32::MAX).get(), 600);
    }

    #[test]
    fn test_resize_output_clamps() {
        let mut state = ViewState::default();
        for requested in [i32::MIN, 299, 300, 512, 600, 601, i32::MAX] {
            let width = state.resize_output(requested).get();
            assert!((PanelWidth::MIN..=PanelWidth::MAX).contains(&width));
            assert_eq!(state.output_width().get(), width);
        }
        assert_eq!(state.resize_output(512).get(), 512);
    }

    #[test]
    fn test_new_clamps_width() {
        let state = ViewState::new(LanguageId::Go, 1000, Theme::Dark, RunOutput::Echo);
        assert_eq!(state.output_width().get(), 600);
        assert_eq!(state.output(), RUN_ACKNOWLEDGEMENT);
        assert_eq!(state.language(), LanguageId::Go);
    }

    #[test]
    fn test_select_language_reports_change() {
        let mut state = ViewState::default();
        assert!(!state.select_language(LanguageId::JavaScript));
        assert!(state.select_language(LanguageId::Rust));
        assert_eq!(state.language(), LanguageId::Rust);
        assert!(!state.select_language(LanguageId::Rust));
    }

    #[test]
    fn test_run_is_never_empty() {
        let mut state = ViewState::default();
        state.clear();
        state.run(Some(""));
        assert!(!state.output().is_empty());
        assert_eq!(state.output(), RUN_ACKNOWLEDGEMENT);
    }

    #[test]
    fn test_run_without_editor_keeps_output() {
        let mut state = ViewState::default();
        state.clear();
        state.run(None);
        assert_eq!(state.output(), CLEARED_OUTPUT);
    }

    #[test]
    fn test_run_echo_mode() {
        let mut state = ViewState::new(LanguageId::Python, 400, Theme::Light, RunOutput::Echo);
        state.run(Some("print('hi')"));
        assert_eq!(state.output(), "print('hi')");
    }

    #[test]
    fn test_clear_overrides_run() {
        let mut state = ViewState::new(LanguageId::Python, 400, Theme::Light, RunOutput::Echo);
        state.run(Some("print('hi')"));
        state.clear();
        assert_eq!(state.output(), "Output cleared!");
    }

    #[test]
    fn test_toggle_theme_twice_restores() {
        let mut state = ViewState::default();
        assert_eq!(state.toggle_theme(), Theme::Dark);
        assert_eq!(state.toggle_theme(), Theme::Light);
        assert_eq!(state, ViewState::default());
    }
}
