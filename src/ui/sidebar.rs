use fltk::{
    app::Sender,
    button::Button,
    enums::{Color, Font, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
};

use crate::app::domain::language::LanguageId;
use crate::app::domain::messages::Message;
use crate::app::services::registry;
use super::theme::Palette;

pub const SIDEBAR_WIDTH: i32 = 80;
const BUTTON_HEIGHT: i32 = 56;

/// Column of language buttons. The active language's button is filled.
pub struct Sidebar {
    pub widget: Flex,
    buttons: Vec<(LanguageId, Button)>,
    active: LanguageId,
    palette_bg: Color,
    palette_active: Color,
}

impl Sidebar {
    pub fn new(sender: &Sender<Message>, active: LanguageId, palette: &Palette) -> Self {
        let mut widget = Flex::default();
        widget.set_type(FlexType::Column);
        widget.set_margins(8, 16, 8, 16);
        widget.set_spacing(8);
        widget.set_frame(FrameType::FlatBox);

        let mut buttons = Vec::with_capacity(registry::all().len());
        for profile in registry::all() {
            let mut btn = Button::default().with_label(profile.icon.glyph);
            btn.set_frame(FrameType::RFlatBox);
            btn.set_down_frame(FrameType::RFlatBox);
            btn.set_label_font(Font::HelveticaBold);
            btn.set_label_size(16);
            let (r, g, b) = profile.icon.rgb;
            btn.set_label_color(Color::from_rgb(r, g, b));
            btn.set_tooltip(profile.display_name);
            btn.clear_visible_focus();
            let id = profile.id;
            let s = *sender;
            btn.set_callback(move |_| s.send(Message::SelectLanguage(id)));
            widget.fixed(&btn, BUTTON_HEIGHT);
            buttons.push((id, btn));
        }

        // Filler so the buttons stay packed at the top.
        Frame::default();
        widget.end();

        let mut sidebar = Self {
            widget,
            buttons,
            active,
            palette_bg: palette.sidebar_bg,
            palette_active: palette.sidebar_active,
        };
        sidebar.repaint();
        sidebar
    }

    pub fn set_active(&mut self, active: LanguageId) {
        self.active = active;
        self.repaint();
    }

    pub fn apply_palette(&mut self, palette: &Palette) {
        self.palette_bg = palette.sidebar_bg;
        self.palette_active = palette.sidebar_active;
        self.repaint();
    }

    fn repaint(&mut self) {
        self.widget.set_color(self.palette_bg);
        for (id, btn) in &mut self.buttons {
            let color = if *id == self.active { self.palette_active } else { self.palette_bg };
            btn.set_color(color);
            btn.set_selection_color(self.palette_active);
        }
        self.widget.redraw();
    }
}
