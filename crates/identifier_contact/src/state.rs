//! What the Contact page shows around a submission.

use crate::{ContactClient, ContactForm};
use identifier_error::{ContactErrorKind, ContactResult, UserFacing};
use tracing::{debug, warn};

/// Shown after the endpoint accepts a message.
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

/// Submit button text while idle.
pub const SUBMIT_LABEL: &str = "Send Message";

/// Submit button text while a submission is in flight.
pub const SUBMITTING_LABEL: &str = "Sending...";

/// Contact page state: the form, a submitting flag and the last outcome.
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    form: ContactForm,
    submitting: bool,
    success: Option<String>,
    error: Option<String>,
}

impl ContactFormState {
    /// Empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field values.
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Replaces the field values.
    pub fn set_form(&mut self, form: ContactForm) {
        self.form = form;
    }

    /// Whether a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Success banner, if the last submission was delivered.
    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// Error banner, if the last submission failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit button text.
    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Marks a submission as started and returns the form to send.
    ///
    /// Returns `None` while another submission is in flight.
    pub fn begin(&mut self) -> Option<ContactForm> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.success = None;
        self.error = None;
        Some(self.form.clone())
    }

    /// Records the outcome of the submission started by [`begin`](Self::begin).
    ///
    /// Success clears the form; failure keeps it for another attempt.
    pub fn finish(&mut self, outcome: ContactResult<()>) {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.success = Some(SUCCESS_MESSAGE.to_string());
                self.form.clear();
            }
            Err(e) => {
                warn!(error = %e, "Contact submission failed");
                let message = match &e.kind {
                    ContactErrorKind::MissingField(_) | ContactErrorKind::InvalidEmail(_) => {
                        e.kind.to_string()
                    }
                    _ => e.user_message().to_string(),
                };
                self.error = Some(message);
            }
        }
    }

    /// Sends the current form through `client`.
    ///
    /// Returns whether the message was delivered.
    pub async fn submit(&mut self, client: &ContactClient) -> bool {
        let Some(form) = self.begin() else {
            debug!("Submission already in flight");
            return false;
        };
        let outcome = client.submit(&form).await;
        let delivered = outcome.is_ok();
        self.finish(outcome);
        delivered
    }
}
