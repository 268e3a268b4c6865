use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::app::infrastructure::error::AppError;

/// Languages offered in the sidebar.
///
/// Serialized with the same lowercase ids shown to the user (`"c++"` for C++),
/// so settings files and the `--language` flag share one spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LanguageId {
    #[default]
    #[serde(rename = "javascript")]
    JavaScript,
    #[serde(rename = "python")]
    Python,
    #[serde(rename = "php")]
    Php,
    #[serde(rename = "rust")]
    Rust,
    #[serde(rename = "c++", alias = "cpp")]
    Cpp,
    #[serde(rename = "go")]
    Go,
}

impl LanguageId {
    /// Sidebar order.
    pub const ALL: [LanguageId; 6] = [
        Self::JavaScript,
        Self::Python,
        Self::Php,
        Self::Rust,
        Self::Cpp,
        Self::Go,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::Python => "python",
            Self::Php => "php",
            Self::Rust => "rust",
            Self::Cpp => "c++",
            Self::Go => "go",
        }
    }

    /// Text a fresh editor is seeded with after a language switch.
    pub fn boilerplate(&self) -> String {
        format!("// Write your {} code here...", self.as_str())
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" => Ok(Self::JavaScript),
            "python" | "py" => Ok(Self::Python),
            "php" => Ok(Self::Php),
            "rust" | "rs" => Ok(Self::Rust),
            "c++" | "cpp" => Ok(Self::Cpp),
            "go" | "golang" => Ok(Self::Go),
            other => Err(AppError::UnknownLanguage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_javascript() {
        assert_eq!(LanguageId::default(), LanguageId::JavaScript);
    }

    #[test]
    fn test_parse_round_trips_display() {
        for lang in LanguageId::ALL {
            let parsed: LanguageId = lang.to_string().parse().unwrap();
            assert_eq!(parsed, lang);
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("cpp".parse::<LanguageId>().unwrap(), LanguageId::Cpp);
        assert_eq!(" Rust ".parse::<LanguageId>().unwrap(), LanguageId::Rust);
        assert_eq!("js".parse::<LanguageId>().unwrap(), LanguageId::JavaScript);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "swift".parse::<LanguageId>().unwrap_err();
        assert!(matches!(err, AppError::UnknownLanguage(ref s) if s == "swift"));
    }

    #[test]
    fn test_boilerplate_embeds_id() {
        assert_eq!(LanguageId::Python.boilerplate(), "// Write your python code here...");
        assert_eq!(LanguageId::Cpp.boilerplate(), "// Write your c++ code here...");
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&LanguageId::Cpp).unwrap();
        assert_eq!(json, "\"c++\"");
        let lang: LanguageId = serde_json::from_str("\"cpp\"").unwrap();
        assert_eq!(lang, LanguageId::Cpp);
    }
}
