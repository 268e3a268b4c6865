use fltk::{enums::Color, prelude::*, text::TextEditor};

use crate::app::domain::view_state::Theme;
use super::main_window::MainWidgets;

/// Window chrome colours for one theme. The sidebar and output panel keep
/// their colours in both themes; only the background and toolbar text flip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub window_bg: Color,
    pub toolbar_text: Color,
    pub sidebar_bg: Color,
    pub sidebar_active: Color,
    pub output_bg: Color,
    pub output_text: Color,
}

pub fn palette(theme: Theme) -> Palette {
    let (window_bg, toolbar_text) = match theme {
        Theme::Dark => (Color::from_rgb(0, 0, 0), Color::White),
        Theme::Light => (Color::from_rgb(243, 244, 246), Color::Black),
    };
    Palette {
        window_bg,
        toolbar_text,
        sidebar_bg: Color::from_rgb(17, 24, 39),
        sidebar_active: Color::from_rgb(55, 65, 81),
        output_bg: Color::from_rgb(229, 231, 235),
        output_text: Color::Black,
    }
}

/// Label of the theme button: the sun switches back to light, the moon to dark.
pub fn theme_glyph(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "\u{2600}",
        Theme::Light => "\u{263e}",
    }
}

pub fn apply_theme(widgets: &mut MainWidgets, theme: Theme) {
    let p = palette(theme);

    widgets.wind.set_color(p.window_bg);
    widgets.root.set_color(p.window_bg);
    widgets.toolbar.set_color(p.window_bg);
    widgets.slider_row.set_color(p.window_bg);

    for btn in [&mut widgets.run_btn, &mut widgets.clear_btn, &mut widgets.theme_btn] {
        btn.set_color(p.window_bg);
        btn.set_label_color(p.toolbar_text);
    }
    widgets.theme_btn.set_label(theme_glyph(theme));

    widgets.sidebar.apply_palette(&p);

    widgets.output_pane.set_color(p.output_bg);
    widgets.output_title.set_label_color(p.output_text);
    widgets.output_display.set_color(p.output_bg);
    widgets.output_display.set_text_color(p.output_text);

    widgets.width_slider.set_color(p.window_bg);

    #[cfg(target_os = "windows")]
    set_windows_titlebar_theme(&widgets.wind, theme.is_dark());

    widgets.wind.redraw();
}

/// Cursor, selection and gutter colours of an editor. Text and background
/// colours come from the syntax theme.
pub fn style_editor(editor: &mut TextEditor, theme: Theme) {
    if theme.is_dark() {
        editor.set_cursor_color(Color::from_rgb(255, 255, 255));
        editor.set_selection_color(Color::from_rgb(70, 70, 100));
        editor.set_linenumber_bgcolor(Color::from_rgb(40, 40, 40));
        editor.set_linenumber_fgcolor(Color::from_rgb(150, 150, 150));
    } else {
        editor.set_cursor_color(Color::Black);
        editor.set_selection_color(Color::from_rgb(173, 216, 230));
        editor.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
        editor.set_linenumber_fgcolor(Color::from_rgb(100, 100, 100));
    }
    editor.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &fltk::window::Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    let on: i32 = if is_dark { 1 } else { 0 };

    // SAFETY: the window is shown, so raw_handle is a valid HWND.
    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);
        // 20 = DWMWA_USE_IMMERSIVE_DARK_MODE, 19 on builds before 2004.
        for attr in [20, 19] {
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attr),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}
