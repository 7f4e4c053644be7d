//! Project Cards
//!
//! Grid of catalog entries. Clicking a card opens its modal; clicking one of
//! its outbound links navigates instead.

use dioxus::prelude::*;
use portfolio_core::{activation_target, CardTarget, LinkKind, ProjectEntry, Tilt};
use portfolio_ui::{FaIcon, TechTags};

use crate::context::{use_catalog, use_overlays};

/// Tags shown on a card before the modal shows the full list
const CARD_TAG_LIMIT: usize = 3;

/// All catalog projects, in catalog order
#[component]
pub fn ProjectsGrid() -> Element {
    let catalog = use_catalog();

    if catalog.is_empty() {
        return rsx! {
            p { class: "projects-empty", "No projects yet." }
        };
    }

    rsx! {
        div { class: "projects-grid",
            for entry in catalog.iter() {
                ProjectCard { key: "{entry.id}", entry: entry.clone() }
            }
        }
    }
}

#[component]
fn ProjectCard(entry: ProjectEntry) -> Element {
    let catalog = use_catalog();
    let mut overlays = use_overlays();
    let mut tilt = use_signal(Tilt::default);
    let mut size: Signal<Option<(f64, f64)>> = use_signal(|| None);

    let project_id = entry.id.clone();
    let mut activate = move |target: CardTarget| {
        if let Some(id) = activation_target(Some(&project_id), target) {
            overlays.write().open_project(&catalog, id);
        }
    };

    let summary = entry.card_summary();
    let transform = tilt.read().transform();

    rsx! {
        div {
            class: "project-card",
            "data-project": "{entry.id}",
            style: "cursor: pointer; transform: {transform};",
            onmounted: move |e| {
                spawn(async move {
                    if let Ok(rect) = e.data().get_client_rect().await {
                        size.set(Some((rect.size.width, rect.size.height)));
                    }
                });
            },
            onmousemove: move |e| {
                if let Some((width, height)) = size() {
                    let point = e.element_coordinates();
                    tilt.set(Tilt::from_pointer(point.x, point.y, width, height));
                }
            },
            onmouseleave: move |_| tilt.set(Tilt::default()),
            onclick: move |_| activate(CardTarget::Body),

            div { class: "project-image",
                FaIcon { class: entry.icon.clone() }
            }

            div { class: "project-content",
                h3 { class: "project-title", "{entry.title}" }
                p { class: "project-description", "{summary}" }
                TechTags {
                    tags: entry.tech.clone(),
                    limit: CARD_TAG_LIMIT,
                    class: "project-tech".to_string(),
                }

                if let Some(github) = entry.github.clone() {
                    div { class: "project-links",
                        a {
                            class: "project-link",
                            href: "{github}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": LinkKind::Source.label(),
                            // Follows the href; the card's own click never sees it
                            onclick: move |e| e.stop_propagation(),
                            FaIcon { class: LinkKind::Source.icon().to_string() }
                        }
                    }
                }
            }
        }
    }
}
