//! Page Section
//!
//! A top-level `section` that registers its mounted element so the page can
//! scroll to it and work out which nav link to highlight.

use std::rc::Rc;

use dioxus::prelude::*;

/// Mounted page sections, in registration order
pub type SectionRegistry = Signal<Vec<(String, Rc<MountedData>)>>;

#[component]
pub fn PageSection(id: &'static str, class: &'static str, children: Element) -> Element {
    let mut sections = use_context::<SectionRegistry>();

    rsx! {
        section {
            id: "{id}",
            class: "{class}",
            onmounted: move |e| {
                let mut registry = sections.write();
                registry.retain(|(existing, _)| existing != id);
                registry.push((id.to_string(), e.data()));
            },
            div { class: "container", {children} }
        }
    }
}
