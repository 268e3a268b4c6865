//! Ownership of the single live editing surface.
//!
//! The host keeps at most one surface. Every `mount` releases the current
//! surface before a new one is built, so two instances never coexist and the
//! old buffer is dropped with it.

use crate::app::domain::language::LanguageId;
use crate::app::infrastructure::error::Result;
use crate::app::services::registry::{self, LanguageProfile};

/// Everything a factory needs to build a surface for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConfig {
    pub language: LanguageId,
    pub profile: &'static LanguageProfile,
    pub initial_text: String,
}

impl SurfaceConfig {
    pub fn for_language(language: LanguageId) -> Self {
        Self {
            language,
            profile: registry::profile(language),
            initial_text: language.boilerplate(),
        }
    }
}

/// A text-editing widget instance.
pub trait EditingSurface {
    fn language(&self) -> LanguageId;

    /// Raw text of the buffer.
    fn text(&self) -> String;

    /// Release the widget and everything attached to it.
    fn destroy(self);
}

/// Builds surfaces. Fails when there is nowhere to mount one.
pub trait SurfaceFactory {
    type Surface: EditingSurface;

    fn construct(&mut self, config: &SurfaceConfig) -> Result<Self::Surface>;
}

pub struct EditorHost<F: SurfaceFactory> {
    factory: F,
    live: Option<F::Surface>,
}

impl<F: SurfaceFactory> EditorHost<F> {
    pub fn new(factory: F) -> Self {
        Self { factory, live: None }
    }

    /// Replace the live surface with a fresh one for `language`.
    ///
    /// The previous buffer is discarded; the new one holds only the language
    /// boilerplate. On error the host is left unmounted.
    pub fn mount(&mut self, language: LanguageId) -> Result<()> {
        self.unmount();
        let config = SurfaceConfig::for_language(language);
        let surface = self.factory.construct(&config)?;
        log::info!("Editor mounted for {}", language);
        self.live = Some(surface);
        Ok(())
    }

    pub fn unmount(&mut self) {
        if let Some(old) = self.live.take() {
            log::debug!("Releasing {} editor", old.language());
            old.destroy();
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.live.is_some()
    }

    pub fn language(&self) -> Option<LanguageId> {
        self.live.as_ref().map(|s| s.language())
    }

    pub fn current_text(&self) -> Option<String> {
        self.live.as_ref().map(|s| s.text())
    }

    pub fn surface_mut(&mut self) -> Option<&mut F::Surface> {
        self.live.as_mut()
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }
}

impl<F: SurfaceFactory> Drop for EditorHost<F> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::error::AppError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Ledger {
        live: usize,
        max_live: usize,
        constructed: Vec<LanguageId>,
        destroyed: Vec<LanguageId>,
    }

    struct FakeSurface {
        language: LanguageId,
        text: String,
        ledger: Rc<RefCell<Ledger>>,
    }

    impl EditingSurface for FakeSurface {
        fn language(&self) -> LanguageId {
            self.language
        }

        fn text(&self) -> String {
            self.text.clone()
        }

        fn destroy(self) {
            let mut ledger = self.ledger.borrow_mut();
            ledger.live -= 1;
            ledger.destroyed.push(self.language);
        }
    }

    struct FakeFactory {
        ledger: Rc<RefCell<Ledger>>,
        mount_present: bool,
    }

    impl SurfaceFactory for FakeFactory {
        type Surface = FakeSurface;

        fn construct(&mut self, config: &SurfaceConfig) -> Result<FakeSurface> {
            if !self.mount_present {
                return Err(AppError::MountPointMissing("editor".to_string()));
            }
            let mut ledger = self.ledger.borrow_mut();
            ledger.live += 1;
            ledger.max_live = ledger.max_live.max(ledger.live);
            ledger.constructed.push(config.language);
            Ok(FakeSurface {
                language: config.language,
                text: config.initial_text.clone(),
                ledger: self.ledger.clone(),
            })
        }
    }

    fn host() -> (EditorHost<FakeFactory>, Rc<RefCell<Ledger>>) {
        let ledger = Rc::new(RefCell::new(Ledger::default()));
        let factory = FakeFactory { ledger: ledger.clone(), mount_present: true };
        (EditorHost::new(factory), ledger)
    }

    #[test]
    fn test_mount_seeds_boilerplate() {
        let (mut host, _) = host();
        host.mount(LanguageId::Python).unwrap();
        assert_eq!(host.language(), Some(LanguageId::Python));
        assert_eq!(host.current_text().as_deref(), Some("// Write your python code here..."));
    }

    #[test]
    fn test_every_switch_keeps_one_live_instance() {
        let (mut host, ledger) = host();
        host.mount(LanguageId::JavaScript).unwrap();
        for lang in LanguageId::ALL {
            host.mount(lang).unwrap();
            assert_eq!(ledger.borrow().live, 1);
            assert_eq!(host.language(), Some(lang));
        }
        let ledger = ledger.borrow();
        assert_eq!(ledger.max_live, 1);
        assert_eq!(ledger.destroyed.len(), LanguageId::ALL.len());
    }

    #[test]
    fn test_previous_instance_released_first() {
        let (mut host, ledger) = host();
        host.mount(LanguageId::JavaScript).unwrap();
        host.mount(LanguageId::Rust).unwrap();
        let ledger = ledger.borrow();
        assert_eq!(ledger.constructed, vec![LanguageId::JavaScript, LanguageId::Rust]);
        assert_eq!(ledger.destroyed, vec![LanguageId::JavaScript]);
    }

    #[test]
    fn test_missing_mount_point_leaves_host_unmounted() {
        let (mut host, ledger) = host();
        host.mount(LanguageId::Go).unwrap();
        host.factory_mut().mount_present = false;

        let err = host.mount(LanguageId::Php).unwrap_err();
        assert!(matches!(err, AppError::MountPointMissing(_)));
        assert!(!host.is_mounted());
        assert_eq!(host.current_text(), None);
        assert_eq!(ledger.borrow().live, 0);
    }

    #[test]
    fn test_drop_releases_surface() {
        let (mut host, ledger) = host();
        host.mount(LanguageId::Cpp).unwrap();
        drop(host);
        assert_eq!(ledger.borrow().live, 0);
    }

    #[test]
    fn test_config_uses_registry_profile() {
        let config = SurfaceConfig::for_language(LanguageId::Cpp);
        assert_eq!(config.profile.syntax_name, "C++");
        assert_eq!(config.initial_text, "// Write your c++ code here...");
    }
}
