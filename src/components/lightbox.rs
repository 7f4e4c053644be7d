//! Image Lightbox
//!
//! Full-size view of one gallery image, stacked above the project modal.

use dioxus::prelude::*;
use portfolio_ui::CloseButton;

use crate::context::{use_overlays, use_page_focus};

#[component]
pub fn Lightbox() -> Element {
    let mut overlays = use_overlays();
    let focus = use_page_focus();
    let mut failed_src: Signal<Option<String>> = use_signal(|| None);

    let Some(image) = overlays.read().lightbox().image().cloned() else {
        return VNode::empty();
    };

    let mut close = move || {
        if overlays.write().close_image() {
            focus.restore();
        }
    };

    let hidden = failed_src.read().as_deref() == Some(image.src.as_str());
    let style = if hidden { "display: none;" } else { "" };
    let src = image.src.clone();

    rsx! {
        div { id: "imageLightbox", class: "lightbox active",
            div { class: "lightbox-overlay", onclick: move |_| close() }

            div { class: "lightbox-content",
                CloseButton { onclick: move |_| close(), class: "lightbox-close".to_string() }
                img {
                    class: "lightbox-image",
                    src: "{image.src}",
                    alt: "{image.caption}",
                    style: "{style}",
                    onerror: move |_| failed_src.set(Some(src.clone())),
                }
                p { class: "lightbox-caption", "{image.caption}" }
            }
        }
    }
}
