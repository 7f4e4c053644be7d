//! Navigation Bar
//!
//! Fixed header with the owner's name and one link per page section. The
//! link for the section currently in view is highlighted.

use dioxus::prelude::*;
use portfolio_core::nav::is_active_link;

/// Page sections reachable from the nav bar: (section id, label)
pub const NAV_SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

#[derive(Props, Clone, PartialEq)]
pub struct NavBarProps {
    /// Brand text on the left
    pub brand: String,
    /// Id of the section currently in view
    pub active: Option<String>,
    /// Called with a section id when its link is clicked
    pub on_navigate: EventHandler<&'static str>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let active = props.active.as_deref();
    let on_navigate = props.on_navigate;

    rsx! {
        nav { class: "navbar",
            div { class: "nav-container",
                span { class: "nav-logo", "{props.brand}" }

                ul { class: "nav-menu",
                    for (id, label) in NAV_SECTIONS {
                        {
                            let href = format!("#{}", id);
                            let class = if is_active_link(&href, active) {
                                "nav-link active"
                            } else {
                                "nav-link"
                            };
                            rsx! {
                                li { key: "{id}", class: "nav-item",
                                    a {
                                        class: "{class}",
                                        href: "{href}",
                                        onclick: move |e| {
                                            e.prevent_default();
                                            on_navigate.call(id);
                                        },
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
