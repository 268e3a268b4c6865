use std::ffi::c_void;

use fltk::{
    app::{self, Sender},
    enums::{Event, Font, Key},
    group::Group,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
};

use crate::app::controllers::editor_host::{EditingSurface, SurfaceConfig, SurfaceFactory};
use crate::app::domain::language::LanguageId;
use crate::app::domain::messages::Message;
use crate::app::domain::view_state::Theme;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::registry::LanguageProfile;
use crate::app::services::syntax::plain_style;
use crate::ui::theme::style_editor;

/// Widget id of the group the editor is mounted into.
pub const EDITOR_MOUNT_ID: &str = "editor";

/// The closure type stored behind the FFI `void* cbArg`.
type ModifyCb = dyn FnMut(i32, i32, i32);

/// Fixed C callback for every surface. Being a single function pointer lets
/// `Fl_Text_Buffer_remove_modify_callback` match it on release; fltk-rs's own
/// wrapper allocates a new shim per registration and can never be removed.
///
/// # Safety
///
/// `cb_arg` must be the `Box<ModifyCb>` pointer produced by
/// `register_modify_callback` and not yet freed by `FltkSurface::release`.
unsafe extern "C" fn modify_shim(
    pos: std::ffi::c_int,
    n_inserted: std::ffi::c_int,
    n_deleted: std::ffi::c_int,
    _n_restyled: std::ffi::c_int,
    _deleted_text: *const std::ffi::c_char,
    cb_arg: *mut c_void,
) {
    if cb_arg.is_null() {
        log::warn!("modify_shim called with null callback argument");
        return;
    }
    // SAFETY: non-null and owned by a live surface (see function docs).
    unsafe {
        let cb: &mut Box<ModifyCb> = &mut *(cb_arg as *mut Box<ModifyCb>);
        cb(pos, n_inserted, n_deleted);
    }
}

type ModifyShim = unsafe extern "C" fn(
    std::ffi::c_int,
    std::ffi::c_int,
    std::ffi::c_int,
    std::ffi::c_int,
    *const std::ffi::c_char,
    *mut c_void,
);

unsafe extern "C" {
    fn Fl_Text_Buffer_add_modify_callback(
        buf: *mut c_void,
        cb: Option<ModifyShim>,
        cb_arg: *mut c_void,
    );
    fn Fl_Text_Buffer_remove_modify_callback(
        buf: *mut c_void,
        cb: Option<ModifyShim>,
        cb_arg: *mut c_void,
    );
    fn Fl_Text_Buffer_text(buf: *mut c_void) -> *mut std::ffi::c_char;
    fn free(ptr: *mut c_void);
}

/// Keep `style_buffer` the same length as the text and tell the app to
/// re-highlight. Returns the pointer to free on release.
fn register_modify_callback(
    buffer: &TextBuffer,
    style_buffer: &TextBuffer,
    sender: Sender<Message>,
) -> *mut c_void {
    let mut style_buf = style_buffer.clone();

    let cb: Box<ModifyCb> = Box::new(move |pos: i32, inserted: i32, deleted: i32| {
        if inserted == 0 && deleted == 0 {
            return;
        }
        if inserted > 0 {
            style_buf.insert(pos, &"A".repeat(inserted as usize));
        }
        if deleted > 0 {
            style_buf.remove(pos, pos + deleted);
        }
        sender.send(Message::BufferModified);
    });

    let data = Box::into_raw(Box::new(cb)) as *mut c_void;

    // SAFETY: `data` stays valid until `FltkSurface::release` removes the
    // callback and reclaims the box.
    unsafe {
        Fl_Text_Buffer_add_modify_callback(buffer.as_ptr() as *mut c_void, Some(modify_shim), data);
    }

    data
}

/// Ctrl+Enter runs the buffer. `Fl_Text_Editor` binds Enter in every modifier
/// state, so the chord has to be caught before the editor inserts a newline.
pub fn is_run_chord(key: Key, ctrl: bool) -> bool {
    ctrl && (key == Key::Enter || key == Key::KPEnter)
}

/// `TextBuffer::text()` copies FLTK's malloc'd string but never frees it.
/// Read through the C API and free the copy ourselves.
fn read_buffer(buf: &TextBuffer) -> String {
    // SAFETY: `buf` is a live buffer; FLTK returns a malloc'd NUL-terminated
    // string (or null) that we own and release with `free`.
    unsafe {
        let ptr = Fl_Text_Buffer_text(buf.as_ptr() as *mut c_void);
        if ptr.is_null() {
            return String::new();
        }
        let text = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut c_void);
        text
    }
}

/// Appearance applied to each newly built editor.
#[derive(Debug, Clone, Copy)]
pub struct EditorLook {
    pub font: Font,
    pub font_size: i32,
    pub line_numbers: bool,
    pub theme: Theme,
}

/// A `TextEditor` mounted into the editor group, with its text and style
/// buffers.
pub struct FltkSurface {
    language: LanguageId,
    profile: &'static LanguageProfile,
    editor: TextEditor,
    buffer: TextBuffer,
    style_buffer: TextBuffer,
    parent: Group,
    modify_cb_data: *mut c_void,
}

impl FltkSurface {
    pub fn profile(&self) -> &'static LanguageProfile {
        self.profile
    }

    pub fn editor_mut(&mut self) -> &mut TextEditor {
        &mut self.editor
    }

    /// Editor plus its style buffer, borrowed together for highlighting.
    pub fn highlight_parts(&mut self) -> (&mut TextEditor, &mut TextBuffer) {
        (&mut self.editor, &mut self.style_buffer)
    }

    /// Detach the modify callback, then delete the widget. Idempotent.
    fn release(&mut self) {
        if self.modify_cb_data.is_null() {
            return;
        }

        // SAFETY: remove the callback before freeing its closure so FLTK can
        // never call `modify_shim` with a dangling pointer.
        unsafe {
            Fl_Text_Buffer_remove_modify_callback(
                self.buffer.as_ptr() as *mut c_void,
                Some(modify_shim),
                self.modify_cb_data,
            );
            let _ = Box::from_raw(self.modify_cb_data as *mut Box<ModifyCb>);
        }
        self.modify_cb_data = std::ptr::null_mut();

        self.parent.remove(&self.editor);
        TextEditor::delete(self.editor.clone());
        self.parent.redraw();

        self.buffer.set_text("");
        self.style_buffer.set_text("");
    }
}

impl EditingSurface for FltkSurface {
    fn language(&self) -> LanguageId {
        self.language
    }

    fn text(&self) -> String {
        read_buffer(&self.buffer)
    }

    fn destroy(mut self) {
        self.release();
    }
}

impl Drop for FltkSurface {
    fn drop(&mut self) {
        self.release();
    }
}

pub struct FltkSurfaceFactory {
    mount_id: String,
    sender: Sender<Message>,
    pub look: EditorLook,
}

impl FltkSurfaceFactory {
    pub fn new(mount_id: &str, sender: Sender<Message>, look: EditorLook) -> Self {
        Self {
            mount_id: mount_id.to_string(),
            sender,
            look,
        }
    }
}

impl SurfaceFactory for FltkSurfaceFactory {
    type Surface = FltkSurface;

    fn construct(&mut self, config: &SurfaceConfig) -> Result<FltkSurface> {
        let mut parent = app::widget_from_id::<Group>(&self.mount_id)
            .ok_or_else(|| AppError::MountPointMissing(self.mount_id.clone()))?;

        let mut buffer = TextBuffer::default();
        let mut style_buffer = TextBuffer::default();
        buffer.set_text(&config.initial_text);
        style_buffer.set_text(&plain_style(&config.initial_text));

        parent.begin();
        let mut editor = TextEditor::new(parent.x(), parent.y(), parent.w(), parent.h(), "");
        parent.end();
        parent.resizable(&editor);

        editor.set_buffer(buffer.clone());
        editor.wrap_mode(WrapMode::None, 0);
        editor.set_text_font(self.look.font);
        editor.set_text_size(self.look.font_size);
        editor.set_linenumber_width(if self.look.line_numbers { 40 } else { 0 });
        style_editor(&mut editor, self.look.theme);

        let modify_cb_data = register_modify_callback(&buffer, &style_buffer, self.sender);

        let s = self.sender;
        editor.handle(move |_, ev| {
            if ev == Event::KeyDown && is_run_chord(app::event_key(), app::is_event_ctrl()) {
                s.send(Message::Run);
                return true;
            }
            false
        });

        parent.redraw();
        let _ = editor.take_focus();

        Ok(FltkSurface {
            language: config.language,
            profile: config.profile,
            editor,
            buffer,
            style_buffer,
            parent,
            modify_cb_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_enter_is_run_chord() {
        assert!(is_run_chord(Key::Enter, true));
        assert!(is_run_chord(Key::KPEnter, true));
    }

    #[test]
    fn test_plain_enter_left_to_editor() {
        assert!(!is_run_chord(Key::Enter, false));
        assert!(!is_run_chord(Key::KPEnter, false));
        assert!(!is_run_chord(Key::Tab, true));
        assert!(!is_run_chord(Key::from_char('l'), true));
    }
}
