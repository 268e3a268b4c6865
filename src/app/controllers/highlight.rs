use fltk::{
    app::Sender,
    enums::{Color, Font},
    prelude::*,
    text::{StyleTableEntry, TextBuffer, TextEditor},
};

use crate::app::domain::messages::Message;
use crate::app::domain::settings::SyntaxTheme;
use crate::app::services::registry::LanguageProfile;
use crate::app::services::syntax::{SyntaxHighlighter, plain_style};

/// Seconds of typing quiet before the buffer is re-highlighted.
const REHIGHLIGHT_DELAY: f64 = 0.25;

/// Borrowed pieces of the live editor needed to restyle it.
pub struct HighlightTarget<'a> {
    pub editor: &'a mut TextEditor,
    pub style_buffer: &'a mut TextBuffer,
    pub profile: &'static LanguageProfile,
    pub text: &'a str,
}

pub struct HighlightController {
    highlighter: SyntaxHighlighter,
    font: Font,
    font_size: i32,
    pub highlighting_enabled: bool,
    rehighlight_pending: bool,
}

impl HighlightController {
    pub fn new(theme: SyntaxTheme, font: Font, font_size: i32, highlighting_enabled: bool) -> Self {
        Self {
            highlighter: SyntaxHighlighter::new(theme, font, font_size),
            font,
            font_size,
            highlighting_enabled,
            rehighlight_pending: false,
        }
    }

    pub fn set_theme(&mut self, theme: SyntaxTheme) {
        self.highlighter.set_theme(theme);
    }

    /// Restyle the whole buffer and push colours to the editor.
    pub fn highlight(&mut self, target: HighlightTarget) {
        self.rehighlight_pending = false;

        let (bg, fg) = (self.highlighter.theme_background(), self.highlighter.theme_foreground());
        target.editor.set_color(Color::from_rgb(bg.0, bg.1, bg.2));
        target.editor.set_text_color(Color::from_rgb(fg.0, fg.1, fg.2));

        let (style, table) = if self.highlighting_enabled {
            (
                self.highlighter.highlight(target.text, target.profile),
                self.highlighter.style_table(),
            )
        } else {
            (plain_style(target.text), self.plain_table(fg))
        };
        target.style_buffer.set_text(&style);
        target.editor.set_highlight_data(target.style_buffer.clone(), table);
        target.editor.redraw();
    }

    /// Debounce edits into one `Message::Rehighlight`.
    pub fn schedule_rehighlight(&mut self, sender: &Sender<Message>) {
        if !self.highlighting_enabled || self.rehighlight_pending {
            return;
        }
        self.rehighlight_pending = true;
        let s = *sender;
        fltk::app::add_timeout3(REHIGHLIGHT_DELAY, move |_| s.send(Message::Rehighlight));
    }

    fn plain_table(&self, fg: (u8, u8, u8)) -> Vec<StyleTableEntry> {
        vec![StyleTableEntry {
            color: Color::from_rgb(fg.0, fg.1, fg.2),
            font: self.font,
            size: self.font_size,
        }]
    }
}
