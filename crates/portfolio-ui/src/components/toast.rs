//! Notification Toasts
//!
//! Fixed stack in the top-right corner. Expiry is driven by the owner of the queue.

use dioxus::prelude::*;
use portfolio_core::Notification;

/// Stack of notifications, oldest on top
#[component]
pub fn ToastStack(
    notifications: Vec<Notification>,
    /// Called with the id of a toast the user clicked away
    on_dismiss: EventHandler<u64>,
) -> Element {
    if notifications.is_empty() {
        return VNode::empty();
    }

    rsx! {
        div { class: "notification-stack", role: "status",
            for notification in notifications.iter() {
                {
                    let id = notification.id;
                    let class = format!("notification {}", notification.kind.class());
                    rsx! {
                        div {
                            key: "{id}",
                            class: "{class}",
                            onclick: move |_| on_dismiss.call(id),
                            "{notification.message}"
                        }
                    }
                }
            }
        }
    }
}
