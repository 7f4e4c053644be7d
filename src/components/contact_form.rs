//! Contact Form
//!
//! Four required fields. Submission goes through the `ContactSubmitter`
//! from context; the outcome is reported as a notification.

use dioxus::prelude::*;
use portfolio_core::contact::{MISSING_FIELDS_MESSAGE, SENDING_LABEL};
use portfolio_core::{submit_contact, ContactForm, FormField, NotificationKind};
use portfolio_ui::{Button, ButtonVariant};

use crate::context::{notify, use_notifications, use_site_config, use_submitter};

const SUBMIT_LABEL: &str = "Send Message";

#[component]
pub fn ContactSection() -> Element {
    let config = use_site_config();
    let notifications = use_notifications();
    let submitter = use_submitter();

    let mut form = use_signal(ContactForm::default);
    let mut sending = use_signal(|| false);

    let toast_duration = config.notification_duration();

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        if sending() {
            return;
        }

        let snapshot = form();
        if !snapshot.missing_fields().is_empty() {
            notify(
                notifications,
                NotificationKind::Error,
                MISSING_FIELDS_MESSAGE,
                toast_duration,
            );
            return;
        }

        sending.set(true);
        let submitter = submitter.clone();
        spawn(async move {
            let outcome = submit_contact(&snapshot, submitter.as_ref()).await;
            let (kind, message) = outcome.notification();
            notify(notifications, kind, message, toast_duration);
            if outcome.clears_form() {
                form.write().reset();
            }
            sending.set(false);
        });
    };

    rsx! {
        div { class: "contact-content",
            div { class: "contact-info",
                h3 { "Let's work together" }
                p { "Have a project in mind or just want to say hello? Send a message." }
            }

            div { class: "contact-form",
                form { onsubmit: handle_submit,
                    for field in FormField::ALL {
                        {
                            let key = field.key();
                            let value = form.read().get(field).to_string();
                            rsx! {
                                FormInput {
                                    key: "{key}",
                                    field,
                                    value,
                                    oninput: move |value: String| form.write().set(field, value),
                                }
                            }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Submit,
                        button_type: "submit".to_string(),
                        disabled: sending(),
                        if sending() { "{SENDING_LABEL}" } else { "{SUBMIT_LABEL}" }
                    }
                }
            }
        }
    }
}

/// One form control; the message field is a textarea
#[component]
fn FormInput(field: FormField, value: String, oninput: EventHandler<String>) -> Element {
    let name = field.key();
    let placeholder = field.placeholder();

    match field {
        FormField::Message => rsx! {
            div { class: "form-group",
                textarea {
                    name: "{name}",
                    placeholder: "{placeholder}",
                    rows: "5",
                    value: "{value}",
                    oninput: move |e| oninput.call(e.value()),
                }
            }
        },
        _ => {
            let input_type = if field == FormField::Email { "email" } else { "text" };
            rsx! {
                div { class: "form-group",
                    input {
                        r#type: "{input_type}",
                        name: "{name}",
                        placeholder: "{placeholder}",
                        value: "{value}",
                        oninput: move |e| oninput.call(e.value()),
                    }
                }
            }
        }
    }
}
