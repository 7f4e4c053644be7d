//! Button Components
//!
//! Button styles used across the page:
//! - Primary: filled call-to-action
//! - Secondary: outlined
//! - Submit: form submit, shows a busy label while disabled

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled call-to-action
    #[default]
    Primary,
    /// Outlined secondary action
    Secondary,
    /// Contact form submit
    Submit,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Submit => "btn btn-primary btn-submit",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Submit,
///         button_type: "submit".to_string(),
///         disabled: sending(),
///         "Send Message"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_class(props.variant.class(), props.class.as_deref());
    // Disabled buttons render dimmed while a request is in flight
    let style = if props.disabled { "opacity: 0.7;" } else { "" };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            style: "{style}",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Close button for the modal and lightbox
#[component]
pub fn CloseButton(
    onclick: EventHandler<()>,
    /// Extra class to position the button inside its overlay
    #[props(default)]
    class: Option<String>,
) -> Element {
    let full_class = join_class("close-btn", class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |e| {
                e.stop_propagation();
                onclick.call(());
            },
            "\u{00D7}"
        }
    }
}

fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}
