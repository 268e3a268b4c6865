use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Event, Font, FrameType, Key, Shortcut},
    frame::Frame,
    group::{Flex, FlexType, Group},
    prelude::*,
    text::{TextBuffer, TextDisplay, WrapMode},
    valuator::HorNiceSlider,
    window::Window,
};

use crate::app::domain::messages::Message;
use crate::app::domain::view_state::{PanelWidth, ViewState};
use super::editor_surface::EDITOR_MOUNT_ID;
use super::sidebar::{Sidebar, SIDEBAR_WIDTH};
use super::theme::{palette, theme_glyph};

const TOOLBAR_HEIGHT: i32 = 44;
const SLIDER_ROW_HEIGHT: i32 = 32;
const TOOLBAR_BUTTON_WIDTH: i32 = 64;
const OUTPUT_TITLE_HEIGHT: i32 = 24;

pub struct MainWidgets {
    pub wind: Window,
    pub root: Flex,
    pub toolbar: Flex,
    pub run_btn: Button,
    pub clear_btn: Button,
    pub theme_btn: Button,
    pub body: Flex,
    pub sidebar: Sidebar,
    pub editor_mount: Group,
    pub output_pane: Flex,
    pub output_title: Frame,
    pub output_display: TextDisplay,
    output_buffer: TextBuffer,
    pub slider_row: Flex,
    pub width_slider: HorNiceSlider,
}

impl MainWidgets {
    pub fn set_output_text(&mut self, text: &str) {
        self.output_buffer.set_text(text);
        self.output_display.redraw();
    }

    pub fn set_output_width(&mut self, width: PanelWidth) {
        self.body.fixed(&self.output_pane, width.get());
        self.body.layout();
        if self.width_slider.value() as i32 != width.get() {
            self.width_slider.set_value(width.get() as f64);
        }
        self.wind.redraw();
    }
}

fn toolbar_button(
    label: &str,
    tooltip: &str,
    shortcut: Shortcut,
    sender: &Sender<Message>,
    msg: Message,
) -> Button {
    let mut btn = Button::default().with_label(label);
    btn.set_frame(FrameType::RoundedFrame);
    btn.set_tooltip(tooltip);
    btn.set_shortcut(shortcut);
    btn.clear_visible_focus();
    let s = *sender;
    btn.set_callback(move |_| s.send(msg));
    btn
}

pub fn build_main_window(sender: &Sender<Message>, view: &ViewState) -> MainWidgets {
    let p = palette(view.theme());

    let mut wind = Window::new(100, 100, 1100, 640, "PolyPad");
    wind.set_xclass("PolyPad");

    let mut root = Flex::new(0, 0, 1100, 640, None);
    root.set_type(FlexType::Column);

    // Toolbar: Run / Clear / theme, right aligned
    let mut toolbar = Flex::default();
    toolbar.set_type(FlexType::Row);
    toolbar.set_margins(8, 6, 8, 6);
    toolbar.set_spacing(8);
    Frame::default();
    // The editor catches Ctrl+Enter itself while focused; this covers the rest.
    let run_btn = toolbar_button(
        "Run",
        "Run (Ctrl+Enter)",
        Shortcut::Ctrl | Key::Enter,
        sender,
        Message::Run,
    );
    toolbar.fixed(&run_btn, TOOLBAR_BUTTON_WIDTH);
    let clear_btn = toolbar_button(
        "Clear",
        "Clear output (Ctrl+L)",
        Shortcut::Ctrl | 'l',
        sender,
        Message::Clear,
    );
    toolbar.fixed(&clear_btn, TOOLBAR_BUTTON_WIDTH);
    let mut theme_btn = toolbar_button(
        theme_glyph(view.theme()),
        "Toggle theme (Ctrl+T)",
        Shortcut::Ctrl | 't',
        sender,
        Message::ToggleTheme,
    );
    theme_btn.set_frame(FrameType::OFlatFrame);
    theme_btn.set_label_size(20);
    toolbar.fixed(&theme_btn, TOOLBAR_HEIGHT - 12);
    toolbar.end();
    root.fixed(&toolbar, TOOLBAR_HEIGHT);

    // Body: sidebar | editor | output
    let mut body = Flex::default();
    body.set_type(FlexType::Row);

    let sidebar = Sidebar::new(sender, view.language(), &p);
    body.fixed(&sidebar.widget, SIDEBAR_WIDTH);

    let mut editor_mount = Group::default();
    editor_mount.set_id(EDITOR_MOUNT_ID);
    editor_mount.set_frame(FrameType::FlatBox);
    editor_mount.end();

    let mut output_pane = Flex::default();
    output_pane.set_type(FlexType::Column);
    output_pane.set_margin(12);
    output_pane.set_frame(FrameType::FlatBox);

    let mut output_title = Frame::default().with_label("Output:");
    output_title.set_label_font(Font::HelveticaBold);
    output_title.set_align(Align::Left | Align::Inside);
    output_pane.fixed(&output_title, OUTPUT_TITLE_HEIGHT);

    let output_buffer = TextBuffer::default();
    let mut output_display = TextDisplay::default();
    output_display.set_buffer(output_buffer.clone());
    output_display.set_frame(FrameType::FlatBox);
    output_display.wrap_mode(WrapMode::AtBounds, 0);
    output_display.set_text_font(Font::Courier);
    output_pane.end();

    body.fixed(&output_pane, view.output_width().get());
    body.end();

    // Output width slider
    let mut slider_row = Flex::default();
    slider_row.set_type(FlexType::Row);
    slider_row.set_margins(SIDEBAR_WIDTH + 8, 6, 8, 6);
    let mut width_slider = HorNiceSlider::default();
    width_slider.set_bounds(PanelWidth::MIN as f64, PanelWidth::MAX as f64);
    width_slider.set_step(1.0, 1);
    width_slider.set_value(view.output_width().get() as f64);
    width_slider.set_tooltip("Output panel width");
    {
        let s = *sender;
        width_slider.set_callback(move |sl| {
            s.send(Message::ResizeOutput(sl.value().round() as i32))
        });
    }
    slider_row.end();
    root.fixed(&slider_row, SLIDER_ROW_HEIGHT);

    root.end();
    wind.end();
    wind.resizable(&root);

    {
        let s = *sender;
        // Escape must not close the window; only the close button does.
        wind.set_callback(move |_| {
            if fltk::app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        });
    }

    let mut widgets = MainWidgets {
        wind,
        root,
        toolbar,
        run_btn,
        clear_btn,
        theme_btn,
        body,
        sidebar,
        editor_mount,
        output_pane,
        output_title,
        output_display,
        output_buffer,
        slider_row,
        width_slider,
    };
    widgets.set_output_text(view.output());
    widgets
}
