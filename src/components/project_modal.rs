//! Project Modal
//!
//! Detail overlay for one catalog project. Content comes from the modal
//! controller's rendered `ProjectView`; every dismissal path (close button,
//! backdrop, Escape on the page) goes through `Overlays`.

use dioxus::prelude::*;
use portfolio_core::render::LINK_TARGET;
use portfolio_core::{GalleryItem, GalleryView, MediaItem, Thumbnail};
use portfolio_ui::{CloseButton, FaIcon, TechTags};

use crate::context::{use_overlays, use_page_focus};

#[component]
pub fn ProjectModal() -> Element {
    let mut overlays = use_overlays();
    let focus = use_page_focus();

    let Some(view) = overlays.read().modal().view().cloned() else {
        return VNode::empty();
    };

    let mut close = move || {
        if overlays.write().close_project() {
            focus.restore();
        }
    };

    rsx! {
        div { id: "projectModal", class: "modal active",
            div { class: "modal-overlay", onclick: move |_| close() }

            div { class: "modal-content", role: "dialog", "aria-modal": "true",
                CloseButton { onclick: move |_| close(), class: "modal-close".to_string() }

                ProjectGallery { gallery: view.gallery.clone() }

                div { class: "modal-body",
                    h2 { class: "modal-title", "{view.title}" }

                    p { class: "modal-description",
                        for (i, line) in view.description_lines.iter().enumerate() {
                            if i > 0 {
                                br {}
                            }
                            "{line}"
                        }
                    }

                    TechTags { tags: view.tags.clone() }

                    div { class: "modal-links",
                        for link in view.links.iter() {
                            a {
                                key: "{link.href}",
                                href: "{link.href}",
                                target: LINK_TARGET,
                                rel: "noopener noreferrer",
                                "aria-label": link.kind.label(),
                                FaIcon { class: link.kind.icon().to_string() }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Gallery region: video and thumbnails, or the icon placeholder
#[component]
fn ProjectGallery(gallery: GalleryView) -> Element {
    match gallery {
        GalleryView::Placeholder { icon } => rsx! {
            div { class: "modal-images-gallery",
                div { class: "project-placeholder",
                    FaIcon { class: icon }
                }
            }
        },
        GalleryView::Media(items) => rsx! {
            div { class: "modal-images-gallery",
                for (i, item) in items.into_iter().enumerate() {
                    {
                        // Index only disambiguates repeated sources
                        let key = format!("{}#{}", item.key(), i);
                        match item {
                            GalleryItem::Video(video) => rsx! {
                                VideoItem { key: "{key}", video }
                            },
                            GalleryItem::Thumbnail(thumbnail) => rsx! {
                                ThumbnailItem { key: "{key}", thumbnail }
                            },
                        }
                    }
                }
            }
        },
    }
}

#[component]
fn VideoItem(video: MediaItem) -> Element {
    rsx! {
        div { class: "modal-video-item",
            div { class: "modal-video-wrapper",
                video { controls: true,
                    source { src: "{video.src}", r#type: "video/mp4" }
                    "Your browser does not support the video tag."
                }
            }
            p { class: "modal-video-caption", "{video.caption}" }
        }
    }
}

/// Gallery image wired to its own lightbox activation
#[component]
fn ThumbnailItem(thumbnail: Thumbnail) -> Element {
    let mut overlays = use_overlays();
    let mut failed = use_signal(|| false);

    let activation = thumbnail.on_activate.clone();
    let style = if failed() {
        "display: none;"
    } else {
        "cursor: pointer;"
    };

    rsx! {
        div { class: "modal-image-item",
            div { class: "modal-image-wrapper",
                img {
                    src: "{thumbnail.image.src}",
                    alt: "{thumbnail.image.caption}",
                    style: "{style}",
                    onerror: move |_| {
                        tracing::debug!("Thumbnail failed to load");
                        failed.set(true);
                    },
                    onclick: move |_| overlays.write().open_image(activation.clone()),
                }
            }
            p { class: "modal-image-caption", "{thumbnail.image.caption}" }
        }
    }
}
