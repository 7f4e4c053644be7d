//! The portfolio page.
//!
//! One scrolling container holding every section plus the overlays. The
//! container is the scroll surface the overlays lock, receives the Escape
//! key, and reports scroll position for nav highlighting. Closing an overlay
//! hands focus back to the container so Escape keeps working.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{SectionBounds, SectionTracker};
use portfolio_ui::ToastStack;

use crate::components::{
    ContactSection, Hero, Lightbox, NavBar, PageSection, ProjectModal, ProjectsGrid,
    SectionRegistry,
};
use crate::context::{use_catalog, use_notifications, use_overlays, use_site_config, PageFocus};

/// The portfolio page
#[component]
pub fn Home() -> Element {
    let catalog = use_catalog();
    let config = use_site_config();
    let mut overlays = use_overlays();
    let mut notifications = use_notifications();

    let sections: SectionRegistry = use_signal(Vec::new);
    use_context_provider(|| sections);
    let mut page: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    use_context_provider(|| PageFocus::new(page));
    let tracker = use_hook(|| Rc::new(RefCell::new(SectionTracker::new())));
    let mut active: Signal<Option<String>> = use_signal(|| None);

    let update_active = move |_| {
        let ticket = tracker.borrow_mut().begin();
        let tracker = tracker.clone();
        spawn(async move {
            let Some(container) = page() else { return };
            let Ok(offset) = container.get_scroll_offset().await else {
                return;
            };

            let registered = sections.read().clone();
            let mut bounds = Vec::with_capacity(registered.len());
            for (id, element) in registered {
                if let Ok(rect) = element.get_client_rect().await {
                    bounds.push(SectionBounds::new(
                        id,
                        rect.origin.y + offset.y,
                        rect.size.height,
                    ));
                }
            }

            let mut tracker = tracker.borrow_mut();
            if tracker.finish(ticket, offset.y, &bounds) {
                active.set(tracker.active().map(str::to_string));
            }
        });
    };

    let navigate = move |target: &'static str| {
        let element = sections
            .read()
            .iter()
            .find(|(id, _)| id == target)
            .map(|(_, el)| el.clone());
        if let Some(element) = element {
            spawn(async move {
                let _ = element.scroll_to(ScrollBehavior::Instant).await;
            });
        }
    };

    let project_count = catalog.len();
    let skill_count = config.skills.len();
    let page_class = if overlays.read().scroll_suppressed() {
        "page scroll-locked"
    } else {
        "page"
    };

    rsx! {
        div {
            class: "{page_class}",
            tabindex: "0",
            onmounted: move |e| {
                let data = e.data();
                page.set(Some(data.clone()));
                spawn(async move {
                    let _ = data.set_focus(true).await;
                });
            },
            onscroll: update_active,
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Escape {
                    overlays.write().dismiss_top();
                }
            },

            NavBar {
                brand: config.owner_name.clone(),
                active: active(),
                on_navigate: navigate,
            }

            Hero { on_navigate: navigate }

            PageSection { id: "about", class: "about",
                div { class: "section-header",
                    h2 { class: "section-title", "About Me" }
                }
                div { class: "about-content",
                    p { class: "about-text", "{config.about}" }
                    div { class: "about-stats",
                        div { class: "stat",
                            span { class: "stat-number", "{project_count}" }
                            span { class: "stat-label", "Projects" }
                        }
                        div { class: "stat",
                            span { class: "stat-number", "{skill_count}" }
                            span { class: "stat-label", "Core skills" }
                        }
                    }
                }
            }

            PageSection { id: "skills", class: "skills",
                div { class: "section-header",
                    h2 { class: "section-title", "Skills" }
                }
                div { class: "skills-grid",
                    for skill in config.skills.iter() {
                        div { key: "{skill}", class: "skill-item", "{skill}" }
                    }
                }
            }

            PageSection { id: "projects", class: "projects",
                div { class: "section-header",
                    h2 { class: "section-title", "Projects" }
                }
                ProjectsGrid {}
            }

            PageSection { id: "contact", class: "contact",
                div { class: "section-header",
                    h2 { class: "section-title", "Get In Touch" }
                }
                ContactSection {}
            }

            footer { class: "footer",
                p { "\u{00A9} {config.owner_name}" }
            }

            ProjectModal {}
            Lightbox {}
            ToastStack {
                notifications: notifications.read().iter().cloned().collect::<Vec<_>>(),
                on_dismiss: move |id| {
                    notifications.write().dismiss(id);
                },
            }
        }
    }
}
