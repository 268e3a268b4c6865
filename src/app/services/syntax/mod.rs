//! Syntax highlighting for the editing surface, backed by syntect.

mod highlighter;
mod style_map;

use fltk::enums::Font;
use fltk::text::StyleTableEntry;
use syntect::highlighting::ThemeSet;
use syntect::parsing::{SyntaxReference, SyntaxSet};

use style_map::StyleMap;

use crate::app::domain::settings::SyntaxTheme;
use crate::app::services::registry::LanguageProfile;

pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    style_map: StyleMap,
}

impl SyntaxHighlighter {
    pub fn new(theme: SyntaxTheme, font: Font, font_size: i32) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.theme_key().to_string(),
            style_map: StyleMap::new(font, font_size),
        }
    }

    /// Syntax for a language: by name, then by extension. `None` means the
    /// text is shown unstyled.
    pub fn resolve(&self, profile: &LanguageProfile) -> Option<&SyntaxReference> {
        self.syntax_set
            .find_syntax_by_name(profile.syntax_name)
            .or_else(|| self.syntax_set.find_syntax_by_extension(profile.extension))
            .filter(|s| s.name != "Plain Text")
    }

    /// Style string covering every byte of `text`.
    pub fn highlight(&mut self, text: &str, profile: &LanguageProfile) -> String {
        let Some(syntax) = self.resolve(profile).cloned() else {
            log::debug!("No syntax for {}, using plain style", profile.display_name);
            return plain_style(text);
        };
        let Some(theme) = self.theme_set.themes.get(&self.theme_name) else {
            log::warn!("Syntax theme {} missing from theme set", self.theme_name);
            return plain_style(text);
        };
        highlighter::highlight_full(text, &syntax, &self.syntax_set, theme, &mut self.style_map)
    }

    /// Switch to a specific theme. Clears the style map.
    pub fn set_theme(&mut self, theme: SyntaxTheme) {
        self.theme_name = theme.theme_key().to_string();
        self.style_map.clear();
    }

    /// Background of the current theme, white if it defines none.
    pub fn theme_background(&self) -> (u8, u8, u8) {
        self.theme_set
            .themes
            .get(&self.theme_name)
            .and_then(|t| t.settings.background)
            .map_or((255, 255, 255), |bg| (bg.r, bg.g, bg.b))
    }

    /// Foreground of the current theme, black if it defines none.
    pub fn theme_foreground(&self) -> (u8, u8, u8) {
        self.theme_set
            .themes
            .get(&self.theme_name)
            .and_then(|t| t.settings.foreground)
            .map_or((0, 0, 0), |fg| (fg.r, fg.g, fg.b))
    }

    /// Get the style table for FLTK's set_highlight_data.
    pub fn style_table(&self) -> Vec<StyleTableEntry> {
        self.style_map.entries().to_vec()
    }
}

/// All-'A' style string for unhighlighted text.
pub fn plain_style(text: &str) -> String {
    "A".repeat(text.len())
}
