//! About and contact command handlers.

use identifier::{AboutPage, ContactClient, ContactForm, ContactFormState, IdentifierConfig};
use std::process::ExitCode;
use tracing::instrument;

/// Handles the about command.
pub fn handle_about_command() -> ExitCode {
    print!("{}", AboutPage::new());
    ExitCode::SUCCESS
}

/// Handles the contact command.
#[instrument(skip_all, fields(endpoint = %config.contact().endpoint()))]
pub async fn handle_contact_command(
    config: &IdentifierConfig,
    name: String,
    email: String,
    message: String,
) -> anyhow::Result<ExitCode> {
    let client = ContactClient::new(config.contact().endpoint().as_str())?;
    let mut state = ContactFormState::new();
    state.set_form(ContactForm::new(name, email, message));

    if state.submit(&client).await {
        println!("{}", state.success().unwrap_or_default());
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{}", state.error().unwrap_or_default());
        Ok(ExitCode::FAILURE)
    }
}
