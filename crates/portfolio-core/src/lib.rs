//! Portfolio Core Library
//!
//! Framework-free behavior behind the portfolio page: the project catalog,
//! the modal and lightbox overlays, and the small interactive pieces around
//! them (contact form, notifications, navigation highlighting, effects).
//!
//! ## Overview
//!
//! The page shows a grid of project cards. Clicking a card opens a detail
//! modal rendered from the [`Catalog`]; clicking a thumbnail in that modal
//! opens a lightbox stacked above it. Both overlays suppress background
//! scrolling through a shared [`ScrollLock`] reference count, so closing the
//! lightbox never re-enables scrolling while the modal is still open.
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{Catalog, Overlays};
//!
//! let catalog = Catalog::builtin()?;
//! let mut overlays = Overlays::new();
//!
//! overlays.open_project(&catalog, "lunar-lander");
//! assert!(overlays.scroll_suppressed());
//!
//! overlays.dismiss_top();
//! assert!(!overlays.scroll_suppressed());
//! ```

pub mod card;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod effects;
pub mod error;
pub mod nav;
pub mod notify;
pub mod overlay;
pub mod render;

// Re-exports
pub use card::{activation_target, CardTarget, Tilt};
pub use catalog::{Catalog, MediaItem, ProjectEntry};
pub use config::SiteConfig;
pub use contact::{
    submit_contact, ContactForm, ContactSubmitter, FormField, SimulatedSubmitter, SubmitOutcome,
};
pub use effects::{ShapeJitter, TypingFrames};
pub use error::{PortfolioError, PortfolioResult};
pub use nav::{active_section, is_active_link, SectionBounds, SectionTracker};
pub use notify::{Notification, NotificationKind, Notifications};
pub use overlay::{
    LightboxController, ModalController, OverlayKind, OverlayState, Overlays, ScrollLock,
};
pub use render::{
    render_project, ActionLink, GalleryItem, GalleryView, LinkKind, OpenImage, ProjectView,
    Thumbnail,
};
