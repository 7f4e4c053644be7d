//! Page context for the portfolio.
//!
//! The catalog, site config, contact submitter and the two pieces of mutable
//! page state (overlays, notifications) are provided once by `App` and read
//! by components via `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let catalog = use_catalog();
//! let mut overlays = use_overlays();
//! overlays.write().open_project(&catalog, "pacman");
//! ```

use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use tokio::time::Instant;
use portfolio_core::{
    Catalog, ContactSubmitter, NotificationKind, Notifications, Overlays, SiteConfig,
};

/// Contact submitter shared through context
pub type SharedSubmitter = Rc<dyn ContactSubmitter>;

/// Get the catalog loaded at startup.
pub fn get_catalog() -> Arc<Catalog> {
    crate::get_catalog()
}

/// Get the site config loaded at startup.
pub fn get_site_config() -> SiteConfig {
    crate::get_site_config()
}

/// Hook to access the project catalog.
pub fn use_catalog() -> Arc<Catalog> {
    use_context::<Arc<Catalog>>()
}

/// Hook to access the site config.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Hook to access the modal/lightbox state.
///
/// All overlay changes go through this signal so the scroll lock stays in
/// step with what is on screen.
pub fn use_overlays() -> Signal<Overlays> {
    use_context::<Signal<Overlays>>()
}

/// Hook to access on-screen notifications.
pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

/// Hook to access the contact submitter.
pub fn use_submitter() -> SharedSubmitter {
    use_context::<SharedSubmitter>()
}

/// Handle to the page container, used to take focus back after an overlay
/// closes. A removed close button would otherwise leave focus on `<body>`,
/// outside the container that listens for Escape.
#[derive(Clone, Copy, PartialEq)]
pub struct PageFocus(Signal<Option<Rc<MountedData>>>);

impl PageFocus {
    pub fn new(page: Signal<Option<Rc<MountedData>>>) -> Self {
        Self(page)
    }

    /// Focus the page container once it is mounted
    pub fn restore(&self) {
        let Some(page) = self.0.peek().clone() else {
            return;
        };
        spawn(async move {
            if page.set_focus(true).await.is_err() {
                tracing::debug!("Could not return focus to the page");
            }
        });
    }
}

/// Hook to access the page focus handle.
pub fn use_page_focus() -> PageFocus {
    use_context::<PageFocus>()
}

/// Show a notification and expire it once its `duration` has passed.
pub fn notify(
    mut notifications: Signal<Notifications>,
    kind: NotificationKind,
    message: impl Into<String>,
    duration: Duration,
) {
    notifications.write().push(kind, message, duration);
    spawn(async move {
        tokio::time::sleep(duration).await;
        notifications.write().expire(Instant::now());
    });
}
