use std::cell::Cell;
use std::rc::Rc;

use poly_pad::app::{
    CLEARED_OUTPUT, EditingSurface, EditorHost, LanguageId, RUN_ACKNOWLEDGEMENT, Result, RunOutput,
    SurfaceConfig, SurfaceFactory, Theme, ViewState,
};

/// In-memory surface whose text can be edited like a user would.
struct MemorySurface {
    language: LanguageId,
    text: Rc<std::cell::RefCell<String>>,
    live: Rc<Cell<usize>>,
}

impl EditingSurface for MemorySurface {
    fn language(&self) -> LanguageId {
        self.language
    }

    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn destroy(self) {
        self.live.set(self.live.get() - 1);
    }
}

#[derive(Default)]
struct MemoryFactory {
    live: Rc<Cell<usize>>,
    last_text: Rc<std::cell::RefCell<String>>,
}

impl SurfaceFactory for MemoryFactory {
    type Surface = MemorySurface;

    fn construct(&mut self, config: &SurfaceConfig) -> Result<MemorySurface> {
        assert_eq!(self.live.get(), 0, "previous surface still alive");
        self.live.set(self.live.get() + 1);
        self.last_text = Rc::new(std::cell::RefCell::new(config.initial_text.clone()));
        Ok(MemorySurface {
            language: config.language,
            text: self.last_text.clone(),
            live: self.live.clone(),
        })
    }
}

fn type_into(host: &EditorHost<MemoryFactory>, text: &str) {
    *host.factory().last_text.borrow_mut() = text.to_string();
}

#[test]
fn walkthrough() {
    let mut view = ViewState::default();
    let mut host = EditorHost::new(MemoryFactory::default());
    host.mount(view.language()).unwrap();

    assert_eq!(view.language(), LanguageId::JavaScript);
    assert_eq!(view.output_width().get(), 400);
    assert_eq!(view.output(), "Code Execution Successful!");
    assert_eq!(view.theme(), Theme::Light);

    assert!(view.select_language(LanguageId::Python));
    host.mount(view.language()).unwrap();
    assert_eq!(host.current_text().as_deref(), Some("// Write your python code here..."));

    view.run(host.current_text().as_deref());
    assert_eq!(view.output(), RUN_ACKNOWLEDGEMENT);

    view.clear();
    assert_eq!(view.output(), "Output cleared!");

    assert_eq!(view.toggle_theme(), Theme::Dark);
    assert_eq!(view.toggle_theme(), Theme::Light);
    assert_eq!(host.factory().live.get(), 1);
}

#[test]
fn switching_language_discards_typed_text() {
    let mut view = ViewState::default();
    let mut host = EditorHost::new(MemoryFactory::default());
    host.mount(view.language()).unwrap();

    type_into(&host, "console.log('kept?');");
    assert_eq!(host.current_text().as_deref(), Some("console.log('kept?');"));

    view.select_language(LanguageId::Rust);
    host.mount(view.language()).unwrap();
    assert_eq!(host.current_text().as_deref(), Some("// Write your rust code here..."));
}

#[test]
fn echo_mode_shows_buffer() {
    let mut view = ViewState::new(LanguageId::Go, 400, Theme::Light, RunOutput::Echo);
    let mut host = EditorHost::new(MemoryFactory::default());
    host.mount(view.language()).unwrap();

    type_into(&host, "package main");
    view.run(host.current_text().as_deref());
    assert_eq!(view.output(), "package main");

    type_into(&host, "");
    view.run(host.current_text().as_deref());
    assert_eq!(view.output(), RUN_ACKNOWLEDGEMENT);

    view.clear();
    assert_eq!(view.output(), CLEARED_OUTPUT);
}

#[test]
fn every_language_mounts_exactly_once() {
    let mut view = ViewState::default();
    let mut host = EditorHost::new(MemoryFactory::default());
    host.mount(view.language()).unwrap();

    for lang in LanguageId::ALL {
        if view.select_language(lang) {
            host.mount(lang).unwrap();
        }
        assert_eq!(host.language(), Some(lang));
        assert_eq!(host.factory().live.get(), 1);
        assert_eq!(host.current_text(), Some(lang.boilerplate()));
    }

    host.unmount();
    assert_eq!(host.factory().live.get(), 0);
}
