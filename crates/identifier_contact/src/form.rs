//! Contact form fields and validation.

use derive_getters::Getters;
use identifier_error::{ContactError, ContactErrorKind, ContactResult};
use serde::{Deserialize, Serialize};

/// What the user typed into the Contact page.
///
/// Serializes to the `{name, email, message}` body the contact endpoint
/// expects.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct ContactForm {
    /// Sender name
    name: String,
    /// Reply address
    email: String,
    /// Message body
    message: String,
}

impl ContactForm {
    /// Form with all three fields set.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Creates a builder for `ContactForm`.
    pub fn builder() -> ContactFormBuilder {
        ContactFormBuilder::default()
    }

    /// Checks that every field is filled in and the email looks like one.
    ///
    /// # Errors
    ///
    /// [`ContactErrorKind::MissingField`] for the first blank field, or
    /// [`ContactErrorKind::InvalidEmail`] when the address lacks text on
    /// either side of an `@`.
    pub fn validate(&self) -> ContactResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::new(ContactErrorKind::MissingField(field)));
            }
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ContactError::new(ContactErrorKind::InvalidEmail(
                email.to_string(),
            ))),
        }
    }

    /// Empties every field.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_form_is_valid() {
        let form = ContactForm::new("Ada", "ada@example.com", "Hello");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn blank_field_is_named() {
        let form = ContactForm::new("Ada", "ada@example.com", "   ");
        let err = form.validate().unwrap_err();
        assert_eq!(err.kind, ContactErrorKind::MissingField("message"));
    }

    #[test]
    fn email_needs_both_sides_of_at() {
        for email in ["ada", "@example.com", "ada@"] {
            let err = ContactForm::new("Ada", email, "Hi").validate().unwrap_err();
            assert!(matches!(err.kind, ContactErrorKind::InvalidEmail(_)), "{email}");
        }
    }

    #[test]
    fn serializes_to_endpoint_body() {
        let form = ContactForm::builder()
            .name("Ada")
            .email("ada@example.com")
            .message("Hi")
            .build()
            .unwrap();
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Ada", "email": "ada@example.com", "message": "Hi"})
        );
    }
}
