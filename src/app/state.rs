use fltk::{app::Sender, dialog, prelude::*};

use super::controllers::editor_host::EditorHost;
use super::controllers::highlight::{HighlightController, HighlightTarget};
use super::domain::language::LanguageId;
use super::domain::messages::Message;
use super::domain::settings::AppSettings;
use super::domain::view_state::ViewState;
use crate::ui::editor_surface::{EditorLook, FltkSurfaceFactory, EDITOR_MOUNT_ID};
use crate::ui::main_window::{build_main_window, MainWidgets};
use crate::ui::theme::{apply_theme, style_editor};

pub struct AppState {
    pub view: ViewState,
    pub widgets: MainWidgets,
    pub host: EditorHost<FltkSurfaceFactory>,
    pub highlight: HighlightController,
    pub settings: AppSettings,
    pub sender: Sender<Message>,
}

impl AppState {
    pub fn new(settings: AppSettings, sender: Sender<Message>) -> Self {
        let theme = settings.initial_theme();
        let view = ViewState::new(
            settings.default_language,
            settings.output_width,
            theme,
            settings.run_output,
        );
        let widgets = build_main_window(&sender, &view);

        let font = settings.font.to_font();
        let font_size = settings.font_size as i32;
        let look = EditorLook {
            font,
            font_size,
            line_numbers: settings.line_numbers_enabled,
            theme,
        };
        let host = EditorHost::new(FltkSurfaceFactory::new(EDITOR_MOUNT_ID, sender, look));
        let highlight = HighlightController::new(
            settings.current_syntax_theme(theme),
            font,
            font_size,
            settings.highlighting_enabled,
        );

        Self {
            view,
            widgets,
            host,
            highlight,
            settings,
            sender,
        }
    }

    /// Show the window and mount the first editor.
    pub fn start(&mut self) {
        self.widgets.wind.show();
        // After show(): the Windows title bar needs a live HWND.
        apply_theme(&mut self.widgets, self.view.theme());
        self.mount_editor();
    }

    /// Dispatch one message. Returns `false` when the app should exit.
    pub fn handle(&mut self, msg: Message) -> bool {
        log::debug!("Handling {:?}", msg);
        match msg {
            Message::SelectLanguage(lang) => self.select_language(lang),
            Message::Run => self.run(),
            Message::Clear => self.clear(),
            Message::ToggleTheme => self.toggle_theme(),
            Message::ResizeOutput(px) => self.resize_output(px),
            Message::BufferModified => self.highlight.schedule_rehighlight(&self.sender),
            Message::Rehighlight => self.rehighlight(),
            Message::WindowClose => {
                self.host.unmount();
                return false;
            }
        }
        true
    }

    pub fn select_language(&mut self, lang: LanguageId) {
        if !self.view.select_language(lang) {
            return;
        }
        log::info!("Language switched to {}", lang);
        self.widgets.sidebar.set_active(lang);
        self.mount_editor();
    }

    pub fn run(&mut self) {
        let text = self.host.current_text();
        self.view.run(text.as_deref());
        self.widgets.set_output_text(self.view.output());
    }

    pub fn clear(&mut self) {
        self.view.clear();
        self.widgets.set_output_text(self.view.output());
    }

    pub fn resize_output(&mut self, px: i32) {
        let width = self.view.resize_output(px);
        self.widgets.set_output_width(width);
    }

    pub fn toggle_theme(&mut self) {
        let theme = self.view.toggle_theme();
        log::debug!("Theme is now {:?}", theme);
        apply_theme(&mut self.widgets, theme);

        self.host.factory_mut().look.theme = theme;
        self.highlight.set_theme(self.settings.current_syntax_theme(theme));
        if let Some(surface) = self.host.surface_mut() {
            style_editor(surface.editor_mut(), theme);
        }
        self.rehighlight();
    }

    /// Tear down the current editor and build one for the selected language.
    /// A missing mount point is reported and the window stays usable.
    fn mount_editor(&mut self) {
        let lang = self.view.language();
        match self.host.mount(lang) {
            Ok(()) => self.rehighlight(),
            Err(e) => {
                log::warn!("Could not create {} editor: {}", lang, e);
                dialog::alert_default(&format!("Could not create the editor: {}", e));
            }
        }
    }

    fn rehighlight(&mut self) {
        let text = match self.host.current_text() {
            Some(text) => text,
            None => return,
        };
        if let Some(surface) = self.host.surface_mut() {
            let profile = surface.profile();
            let (editor, style_buffer) = surface.highlight_parts();
            self.highlight.highlight(HighlightTarget {
                editor,
                style_buffer,
                profile,
                text: &text,
            });
        }
    }
}
