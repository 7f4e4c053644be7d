//! Hero Section
//!
//! The owner's name typed out one character at a time, a tagline, and the
//! floating background shapes.

use dioxus::prelude::*;
use portfolio_core::TypingFrames;
use portfolio_ui::{Button, ButtonVariant};

use crate::components::{FloatingShapes, PageSection};
use crate::context::use_site_config;

#[component]
pub fn Hero(on_navigate: EventHandler<&'static str>) -> Element {
    let config = use_site_config();
    let mut typed = use_signal(String::new);

    // Typing reveal; runs once on mount
    use_effect({
        let config = config.clone();
        move || {
            let frames = TypingFrames::new(
                &config.owner_name,
                config.typing_start_delay(),
                config.typing_char_delay(),
            );
            spawn(async move {
                for (delay, text) in frames {
                    tokio::time::sleep(delay).await;
                    typed.set(text);
                }
            });
        }
    });

    rsx! {
        PageSection { id: "home", class: "hero",
            FloatingShapes { count: 4 }

            div { class: "hero-content",
                h1 { class: "hero-title",
                    "Hi, I'm "
                    span { class: "title-name", "{typed}" }
                    span { class: "typing-cursor", "|" }
                }
                p { class: "hero-subtitle", "{config.tagline}" }

                div { class: "hero-buttons",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_navigate.call("projects"),
                        "View My Work"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_navigate.call("contact"),
                        "Get In Touch"
                    }
                }
            }
        }
    }
}
