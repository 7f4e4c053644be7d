//! Font Awesome icon

use dioxus::prelude::*;

/// Renders `<i class="...">` for a Font Awesome class such as `fas fa-robot`
#[component]
pub fn FaIcon(class: String) -> Element {
    rsx! {
        i { class: "{class}", "aria-hidden": "true" }
    }
}
