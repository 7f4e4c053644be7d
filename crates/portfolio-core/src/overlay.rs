//! Modal and lightbox overlays.
//!
//! Each controller owns its own {Closed, Open} state. Background scrolling is
//! governed by [`ScrollLock`], a count of overlays currently holding it: a
//! controller takes one hold on Closed→Open and gives it back on Open→Closed,
//! so nested open/close in any order leaves the page scrollable exactly when
//! no overlay is visible.

use crate::catalog::Catalog;
use crate::render::{render_project, OpenImage, ProjectView};

/// Reference count of overlays suppressing page scroll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollLock {
    holds: usize,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&mut self) {
        self.holds += 1;
    }

    /// Give back one hold. Releasing an unheld lock is ignored.
    pub fn release(&mut self) {
        self.holds = self.holds.saturating_sub(1);
    }

    pub fn holds(&self) -> usize {
        self.holds
    }

    pub fn is_suppressed(&self) -> bool {
        self.holds > 0
    }
}

/// Visibility of a single overlay
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        matches!(self, OverlayState::Open)
    }
}

/// Which overlay an action applied to
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OverlayKind {
    Modal,
    Lightbox,
}

/// Project detail overlay
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalController {
    view: Option<ProjectView>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a project from the catalog.
    ///
    /// Unknown ids are ignored and return `false`. Opening while already
    /// open replaces the content without taking another scroll hold.
    pub fn open(&mut self, catalog: &Catalog, id: &str, scroll: &mut ScrollLock) -> bool {
        let Some(entry) = catalog.get(id) else {
            tracing::debug!("Ignoring open for unknown project '{}'", id);
            return false;
        };

        if self.view.is_none() {
            scroll.acquire();
        }
        self.view = Some(render_project(entry));
        tracing::info!("Opened project modal '{}'", id);
        true
    }

    /// Hide the modal. Returns `false` if it was already closed.
    pub fn close(&mut self, scroll: &mut ScrollLock) -> bool {
        match self.view.take() {
            Some(view) => {
                scroll.release();
                tracing::info!("Closed project modal '{}'", view.id);
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> OverlayState {
        if self.view.is_some() {
            OverlayState::Open
        } else {
            OverlayState::Closed
        }
    }

    /// Content currently shown, if open
    pub fn view(&self) -> Option<&ProjectView> {
        self.view.as_ref()
    }
}

/// Full-size image overlay, stacked above the modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LightboxController {
    image: Option<OpenImage>,
}

impl LightboxController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an image. Re-opening swaps the image without another hold.
    pub fn open(&mut self, image: OpenImage, scroll: &mut ScrollLock) {
        if self.image.is_none() {
            scroll.acquire();
        }
        tracing::debug!("Opened lightbox for {}", image.src);
        self.image = Some(image);
    }

    /// Hide the lightbox. Returns `false` if it was already closed.
    pub fn close(&mut self, scroll: &mut ScrollLock) -> bool {
        if self.image.take().is_some() {
            scroll.release();
            tracing::debug!("Closed lightbox");
            true
        } else {
            false
        }
    }

    pub fn state(&self) -> OverlayState {
        if self.image.is_some() {
            OverlayState::Open
        } else {
            OverlayState::Closed
        }
    }

    pub fn image(&self) -> Option<&OpenImage> {
        self.image.as_ref()
    }
}

/// Both overlays plus the scroll lock they share.
///
/// This is the value the page keeps in its state; every dismissal trigger
/// (close button, backdrop, Escape) goes through it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlays {
    scroll: ScrollLock,
    modal: ModalController,
    lightbox: LightboxController,
}

impl Overlays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_project(&mut self, catalog: &Catalog, id: &str) -> bool {
        self.modal.open(catalog, id, &mut self.scroll)
    }

    pub fn close_project(&mut self) -> bool {
        self.modal.close(&mut self.scroll)
    }

    pub fn open_image(&mut self, image: OpenImage) {
        self.lightbox.open(image, &mut self.scroll);
    }

    pub fn close_image(&mut self) -> bool {
        self.lightbox.close(&mut self.scroll)
    }

    /// The overlay Escape would close: the lightbox wins over the modal
    pub fn active(&self) -> Option<OverlayKind> {
        if self.lightbox.state().is_open() {
            Some(OverlayKind::Lightbox)
        } else if self.modal.state().is_open() {
            Some(OverlayKind::Modal)
        } else {
            None
        }
    }

    /// Close the top-most open overlay (Escape key)
    pub fn dismiss_top(&mut self) -> Option<OverlayKind> {
        let top = self.active()?;
        match top {
            OverlayKind::Lightbox => self.close_image(),
            OverlayKind::Modal => self.close_project(),
        };
        Some(top)
    }

    pub fn scroll_suppressed(&self) -> bool {
        self.scroll.is_suppressed()
    }

    pub fn scroll(&self) -> &ScrollLock {
        &self.scroll
    }

    pub fn modal(&self) -> &ModalController {
        &self.modal
    }

    pub fn lightbox(&self) -> &LightboxController {
        &self.lightbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(src: &str) -> OpenImage {
        OpenImage {
            src: src.to_string(),
            caption: format!("{} caption", src),
        }
    }

    #[test]
    fn test_scroll_lock_counts() {
        let mut lock = ScrollLock::new();
        assert!(!lock.is_suppressed());
        lock.acquire();
        lock.acquire();
        lock.release();
        assert!(lock.is_suppressed());
        lock.release();
        assert!(!lock.is_suppressed());
    }

    #[test]
    fn test_scroll_lock_release_saturates() {
        let mut lock = ScrollLock::new();
        lock.release();
        assert_eq!(lock.holds(), 0);
        lock.acquire();
        assert_eq!(lock.holds(), 1);
    }

    #[test]
    fn test_modal_unknown_id_is_noop() {
        let catalog = Catalog::builtin().unwrap();
        let mut modal = ModalController::new();
        let mut lock = ScrollLock::new();

        assert!(!modal.open(&catalog, "nope", &mut lock));
        assert_eq!(modal.state(), OverlayState::Closed);
        assert_eq!(lock.holds(), 0);
    }

    #[test]
    fn test_modal_reopen_replaces_without_extra_hold() {
        let catalog = Catalog::builtin().unwrap();
        let mut modal = ModalController::new();
        let mut lock = ScrollLock::new();

        modal.open(&catalog, "pacman", &mut lock);
        modal.open(&catalog, "securities", &mut lock);
        assert_eq!(lock.holds(), 1);
        assert_eq!(modal.view().unwrap().id, "securities");

        assert!(modal.close(&mut lock));
        assert!(!modal.close(&mut lock));
        assert_eq!(lock.holds(), 0);
    }

    #[test]
    fn test_lightbox_swap_image() {
        let mut lightbox = LightboxController::new();
        let mut lock = ScrollLock::new();

        lightbox.open(image("a.png"), &mut lock);
        lightbox.open(image("b.png"), &mut lock);
        assert_eq!(lock.holds(), 1);
        assert_eq!(lightbox.image().unwrap().src, "b.png");
    }

    #[test]
    fn test_closing_lightbox_keeps_modal_lock() {
        let catalog = Catalog::builtin().unwrap();
        let mut overlays = Overlays::new();

        overlays.open_project(&catalog, "multilingual-chatbot");
        overlays.open_image(image("a.png"));
        assert!(overlays.close_image());
        assert!(overlays.scroll_suppressed());

        overlays.close_project();
        assert!(!overlays.scroll_suppressed());
    }

    #[test]
    fn test_dismiss_top_order() {
        let catalog = Catalog::builtin().unwrap();
        let mut overlays = Overlays::new();

        overlays.open_project(&catalog, "multilingual-chatbot");
        overlays.open_image(image("a.png"));

        assert_eq!(overlays.dismiss_top(), Some(OverlayKind::Lightbox));
        assert_eq!(overlays.dismiss_top(), Some(OverlayKind::Modal));
        assert_eq!(overlays.dismiss_top(), None);
    }
}
