//! HTTP delivery of contact messages.

use crate::ContactForm;
use identifier_error::{ContactError, ContactErrorKind, ContactResult};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Endpoint used when none is configured.
pub const DEFAULT_CONTACT_ENDPOINT: &str = "http://localhost:3000/api/contact";

/// Posts contact forms to a backend endpoint.
#[derive(Debug, Clone)]
pub struct ContactClient {
    client: Client,
    endpoint: String,
}

impl ContactClient {
    /// Client posting to `endpoint`.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>) -> ContactResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ContactError::new(ContactErrorKind::Transport(e.to_string())))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Target URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Validates `form` and posts it as JSON.
    ///
    /// Any 2xx status is success. Invalid forms are rejected before any
    /// request is made.
    #[instrument(
        skip(self, form),
        fields(endpoint = %self.endpoint, message_len = form.message().len())
    )]
    pub async fn submit(&self, form: &ContactForm) -> ContactResult<()> {
        form.validate()?;

        let response = self
            .client
            .post(&self.endpoint)
            .json(form)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Contact request failed");
                ContactError::new(ContactErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Contact endpoint rejected message");
            return Err(ContactError::new(ContactErrorKind::Status(status.as_u16())));
        }

        debug!(status = %status, "Contact message delivered");
        Ok(())
    }
}
