use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use fltk::enums::Font;

use super::language::LanguageId;
use super::view_state::{PanelWidth, Theme};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::platform::detect_system_dark_mode;
use crate::app::services::runner::RunOutput;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    SystemDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FontChoice {
    ScreenBold,
    Courier,
    HelveticaMono,
}

impl FontChoice {
    pub fn to_font(self) -> Font {
        match self {
            Self::ScreenBold => Font::ScreenBold,
            Self::Courier => Font::Courier,
            Self::HelveticaMono => Font::Screen,
        }
    }
}

/// Syntax highlighting themes bundled with syntect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SyntaxTheme {
    #[default]
    Base16OceanDark,
    Base16OceanLight,
    Base16EightiesDark,
    Base16MochaDark,
    SolarizedDark,
    SolarizedLight,
    InspiredGitHub,
}

impl SyntaxTheme {
    /// Key into syntect's default `ThemeSet`.
    pub fn theme_key(&self) -> &'static str {
        match self {
            Self::Base16OceanDark => "base16-ocean.dark",
            Self::Base16OceanLight => "base16-ocean.light",
            Self::Base16EightiesDark => "base16-eighties.dark",
            Self::Base16MochaDark => "base16-mocha.dark",
            Self::SolarizedDark => "Solarized (dark)",
            Self::SolarizedLight => "Solarized (light)",
            Self::InspiredGitHub => "InspiredGitHub",
        }
    }
}

/// Startup preferences. Read once at launch; the running session's
/// [`ViewState`](super::view_state::ViewState) is never written back here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    #[serde(default)]
    pub default_language: LanguageId,

    #[serde(default = "default_output_width")]
    pub output_width: i32,

    #[serde(default)]
    pub run_output: RunOutput,

    #[serde(default = "default_font")]
    pub font: FontChoice,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_line_numbers")]
    pub line_numbers_enabled: bool,

    #[serde(default = "default_highlighting")]
    pub highlighting_enabled: bool,

    #[serde(default = "default_syntax_theme_light")]
    pub syntax_theme_light: SyntaxTheme,

    #[serde(default = "default_syntax_theme_dark")]
    pub syntax_theme_dark: SyntaxTheme,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Light
}

fn default_output_width() -> i32 {
    PanelWidth::INITIAL
}

fn default_font() -> FontChoice {
    FontChoice::Courier
}

fn default_font_size() -> u32 {
    16
}

fn default_line_numbers() -> bool {
    true
}

fn default_highlighting() -> bool {
    true
}

fn default_syntax_theme_light() -> SyntaxTheme {
    SyntaxTheme::Base16OceanLight
}

fn default_syntax_theme_dark() -> SyntaxTheme {
    SyntaxTheme::Base16OceanDark
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            default_language: LanguageId::default(),
            output_width: default_output_width(),
            run_output: RunOutput::default(),
            font: default_font(),
            font_size: default_font_size(),
            line_numbers_enabled: default_line_numbers(),
            highlighting_enabled: default_highlighting(),
            syntax_theme_light: default_syntax_theme_light(),
            syntax_theme_dark: default_syntax_theme_dark(),
        }
    }
}

impl AppSettings {
    pub fn current_syntax_theme(&self, theme: Theme) -> SyntaxTheme {
        if theme.is_dark() {
            self.syntax_theme_dark
        } else {
            self.syntax_theme_light
        }
    }

    /// Theme the window opens with. `SystemDefault` asks the desktop.
    pub fn initial_theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::SystemDefault => Theme::from_dark(detect_system_dark_mode()),
        }
    }

    /// Load settings from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_or_create(&Self::get_config_path())
    }

    /// A missing file is written out with defaults. A file that fails to
    /// parse or validate is left alone and defaults are used.
    pub fn load_or_create(path: &Path) -> Self {
        if !path.exists() {
            let default = Self::default();
            if let Err(e) = default.save_to(path) {
                log::debug!("Could not write default settings to {}: {}", path.display(), e);
            }
            return default;
        }

        match Self::load_from(path).and_then(|s| s.validate().map(|()| s)) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "Failed to load settings from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Reject values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<()> {
        if !(8..=72).contains(&self.font_size) {
            return Err(AppError::Settings(format!(
                "font_size {} is outside 8..=72",
                self.font_size
            )));
        }
        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("polypad");
        path.push("settings.json");
        path
    }
}
