//! Contact form.
//!
//! Validation is a presence check on the four fields. Delivery is delegated to
//! a [`ContactSubmitter`] so the page can be wired to a real backend; the
//! default [`SimulatedSubmitter`] just waits and reports success.

use std::time::Duration;

use futures::future::BoxFuture;

use crate::error::{PortfolioError, PortfolioResult};
use crate::notify::NotificationKind;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";
pub const SENT_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";
/// Submit button label while a submission is in flight
pub const SENDING_LABEL: &str = "Sending...";

/// Field of the contact form
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    /// Placeholder text shown in the empty input
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Email => "Your Email",
            FormField::Subject => "Subject",
            FormField::Message => "Your Message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Subject => self.subject = value,
            FormField::Message => self.message = value,
        }
    }

    /// Fields that are empty or whitespace only
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|&field| self.get(field).trim().is_empty())
            .collect()
    }

    pub fn validate(&self) -> PortfolioResult<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(PortfolioError::MissingFields(
                missing.iter().map(FormField::key).collect(),
            ))
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Delivers a validated contact form
pub trait ContactSubmitter {
    fn submit(&self, form: ContactForm) -> BoxFuture<'static, PortfolioResult<()>>;
}

/// Submitter with no backend: waits `delay`, then succeeds
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

impl ContactSubmitter for SimulatedSubmitter {
    fn submit(&self, form: ContactForm) -> BoxFuture<'static, PortfolioResult<()>> {
        let delay = self.delay;
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            tracing::info!("Simulated contact submission from {}", form.email);
            Ok(())
        })
    }
}

/// Result of a submit attempt, as the page reports it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Presence check failed; nothing was sent
    Rejected(Vec<FormField>),
    Sent,
    Failed(String),
}

impl SubmitOutcome {
    /// Notification to show for this outcome
    pub fn notification(&self) -> (NotificationKind, String) {
        match self {
            SubmitOutcome::Rejected(_) => {
                (NotificationKind::Error, MISSING_FIELDS_MESSAGE.to_string())
            }
            SubmitOutcome::Sent => (NotificationKind::Success, SENT_MESSAGE.to_string()),
            SubmitOutcome::Failed(reason) => (
                NotificationKind::Error,
                format!("Sorry, your message could not be sent: {}", reason),
            ),
        }
    }

    /// Whether the form should be cleared afterwards
    pub fn clears_form(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }
}

/// Validate `form` and hand it to `submitter`
pub async fn submit_contact(form: &ContactForm, submitter: &dyn ContactSubmitter) -> SubmitOutcome {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        tracing::debug!("Contact form rejected, missing {:?}", missing);
        return SubmitOutcome::Rejected(missing);
    }

    match submitter.submit(form.clone()).await {
        Ok(()) => SubmitOutcome::Sent,
        Err(e) => {
            tracing::warn!("Contact submission failed: {}", e);
            SubmitOutcome::Failed(e.to_string())
        }
    }
}
