//! Tech Tag Chips
//!
//! Row of tag chips, rendered in the order given.

use dioxus::prelude::*;

/// Tag chip row
///
/// `limit` caps how many chips are shown (project cards show a few, the
/// modal shows all).
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TechTags { tags: view.tags.clone() }
/// }
/// ```
#[component]
pub fn TechTags(
    tags: Vec<String>,
    #[props(default)] limit: Option<usize>,
    #[props(default = "modal-tech".to_string())] class: String,
) -> Element {
    let shown = limit.unwrap_or(tags.len()).min(tags.len());

    rsx! {
        div { class: "{class}",
            for (i, tag) in tags.iter().take(shown).enumerate() {
                span { key: "{i}", class: "tech-tag", "{tag}" }
            }
        }
    }
}
