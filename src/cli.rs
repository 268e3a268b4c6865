//! Command-line interface for PolyPad
//!
//! Flags override the values loaded from the settings file for this run only.
//!
//! # Usage
//!
//! ```bash
//! # Open on Rust in dark mode
//! PolyPad --language rust --dark-mode
//!
//! # Echo the buffer into the output panel on Run
//! PolyPad --echo-output
//!
//! # Verbose logging
//! PolyPad --log-level debug
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::app::domain::language::LanguageId;
use crate::app::domain::settings::{AppSettings, ThemeMode};
use crate::app::services::runner::RunOutput;

/// PolyPad - multi-language code playground
#[derive(Parser, Debug, Clone)]
#[command(name = "PolyPad")]
#[command(version)]
#[command(about = "Multi-language code playground", long_about = None)]
pub struct Args {
    /// Language selected at startup (javascript, python, php, rust, c++, go)
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<LanguageId>,

    /// Start in dark mode
    #[arg(long)]
    pub dark_mode: bool,

    /// Initial output panel width in pixels (clamped to 300..=600)
    #[arg(long, value_name = "PX")]
    pub output_width: Option<i32>,

    /// Show the editor text in the output panel on Run
    #[arg(long)]
    pub echo_output: bool,

    /// Settings file to read instead of the default location
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Log level for output
    ///
    /// Available levels: error, warn, info, debug, trace.
    /// RUST_LOG takes precedence when set.
    #[arg(long, default_value = "warn", value_name = "LEVEL")]
    pub log_level: String,
}

impl Args {
    /// Filter string for env_logger. Only our own targets are raised above
    /// warn: the library (`poly_pad`) and the binary (`PolyPad`).
    pub fn log_filter(&self) -> String {
        format!("warn,poly_pad={0},PolyPad={0}", self.log_level)
    }

    pub fn apply_to(&self, settings: &mut AppSettings) {
        if let Some(lang) = self.language {
            settings.default_language = lang;
        }
        if self.dark_mode {
            settings.theme_mode = ThemeMode::Dark;
        }
        if let Some(px) = self.output_width {
            settings.output_width = px;
        }
        if self.echo_output {
            settings.run_output = RunOutput::Echo;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["PolyPad"]);
        assert_eq!(args.language, None);
        assert!(!args.dark_mode);
        assert_eq!(args.log_level, "warn");

        let mut settings = AppSettings::default();
        args.apply_to(&mut settings);
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_overrides_settings() {
        let args = Args::parse_from([
            "PolyPad",
            "--language",
            "c++",
            "--dark-mode",
            "--output-width",
            "9000",
            "--echo-output",
        ]);
        let mut settings = AppSettings::default();
        args.apply_to(&mut settings);
        assert_eq!(settings.default_language, LanguageId::Cpp);
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
        assert_eq!(settings.output_width, 9000);
        assert_eq!(settings.run_output, RunOutput::Echo);
    }

    #[test]
    fn test_unknown_language_rejected() {
        assert!(Args::try_parse_from(["PolyPad", "--language", "cobol"]).is_err());
    }

    #[test]
    fn test_log_filter() {
        let args = Args::parse_from(["PolyPad", "--log-level", "debug"]);
        assert_eq!(args.log_filter(), "warn,poly_pad=debug,PolyPad=debug");
    }

    #[test]
    fn test_default_log_filter_covers_binary() {
        let args = Args::parse_from(["PolyPad"]);
        let filter = args.log_filter();
        assert!(filter.contains("PolyPad=warn"));
        assert!(filter.contains("poly_pad=warn"));
    }
}
