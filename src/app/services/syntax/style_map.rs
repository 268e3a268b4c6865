use std::collections::HashMap;

use fltk::enums::{Color, Font};
use fltk::text::StyleTableEntry;
use syntect::highlighting::Color as SyntectColor;

/// Highest style char FLTK gets from us; colours past it share the last slot.
const LAST_STYLE: u8 = b'Z';

/// Maps syntect RGB colors to FLTK style characters ('A', 'B', 'C', ...).
/// 'A' is always the plain-text style.
pub struct StyleMap {
    color_to_char: HashMap<(u8, u8, u8), char>,
    entries: Vec<StyleTableEntry>,
    font: Font,
    font_size: i32,
}

impl StyleMap {
    pub fn new(font: Font, font_size: i32) -> Self {
        let mut map = Self {
            color_to_char: HashMap::new(),
            entries: Vec::new(),
            font,
            font_size,
        };
        map.insert_plain();
        map
    }

    fn insert_plain(&mut self) {
        self.entries.push(StyleTableEntry {
            color: Color::Foreground,
            font: self.font,
            size: self.font_size,
        });
        self.color_to_char.insert((0, 0, 0), 'A');
    }

    pub fn get_or_insert(&mut self, color: SyntectColor) -> char {
        let key = (color.r, color.g, color.b);
        if let Some(&ch) = self.color_to_char.get(&key) {
            return ch;
        }

        let idx = self.entries.len();
        if idx > (LAST_STYLE - b'A') as usize {
            return LAST_STYLE as char;
        }
        let ch = (b'A' + idx as u8) as char;
        self.entries.push(StyleTableEntry {
            color: Color::from_rgb(color.r, color.g, color.b),
            font: self.font,
            size: self.font_size,
        });
        self.color_to_char.insert(key, ch);
        ch
    }

    pub fn entries(&self) -> &[StyleTableEntry] {
        &self.entries
    }

    /// Drop every colour mapping (theme change).
    pub fn clear(&mut self) {
        self.color_to_char.clear();
        self.entries.clear();
        self.insert_plain();
    }
}
