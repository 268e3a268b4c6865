//! Static table of per-language editor configuration.
//!
//! Every [`LanguageId`] has exactly one profile, so lookups cannot fail.

use crate::app::domain::language::LanguageId;

/// Sidebar icon: a short glyph drawn in the language's accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageIcon {
    pub glyph: &'static str,
    pub rgb: (u8, u8, u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageProfile {
    pub id: LanguageId,
    pub display_name: &'static str,
    /// Syntax name in syntect's default syntax set.
    pub syntax_name: &'static str,
    /// Tried when `syntax_name` is not in the loaded set.
    pub extension: &'static str,
    pub icon: LanguageIcon,
}

static PROFILES: [LanguageProfile; 6] = [
    LanguageProfile {
        id: LanguageId::JavaScript,
        display_name: "JavaScript",
        syntax_name: "JavaScript",
        extension: "js",
        icon: LanguageIcon { glyph: "JS", rgb: (250, 204, 21) },
    },
    LanguageProfile {
        id: LanguageId::Python,
        display_name: "Python",
        syntax_name: "Python",
        extension: "py",
        icon: LanguageIcon { glyph: "Py", rgb: (59, 130, 246) },
    },
    LanguageProfile {
        id: LanguageId::Php,
        display_name: "PHP",
        // "PHP Source" highlights code without an opening `<?php` tag.
        syntax_name: "PHP Source",
        extension: "php",
        icon: LanguageIcon { glyph: "PHP", rgb: (99, 102, 241) },
    },
    LanguageProfile {
        id: LanguageId::Rust,
        display_name: "Rust",
        syntax_name: "Rust",
        extension: "rs",
        icon: LanguageIcon { glyph: "Rs", rgb: (249, 115, 22) },
    },
    LanguageProfile {
        id: LanguageId::Cpp,
        display_name: "C++",
        syntax_name: "C++",
        extension: "cpp",
        icon: LanguageIcon { glyph: "C++", rgb: (168, 85, 247) },
    },
    LanguageProfile {
        id: LanguageId::Go,
        display_name: "Go",
        syntax_name: "Go",
        extension: "go",
        icon: LanguageIcon { glyph: "Go", rgb: (6, 182, 212) },
    },
];

/// `PROFILES` is laid out in `LanguageId` declaration order.
pub fn profile(id: LanguageId) -> &'static LanguageProfile {
    &PROFILES[id as usize]
}

/// All profiles in sidebar order.
pub fn all() -> &'static [LanguageProfile] {
    &PROFILES
}
