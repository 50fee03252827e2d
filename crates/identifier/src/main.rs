//! Object Identifier command-line front end.

mod cli;

use clap::Parser;
use cli::{
    Cli, Commands, handle_about_command, handle_analyze_command, handle_capture_command,
    handle_contact_command,
};
use identifier::{IdentifierConfig, init_logging};
use std::process::ExitCode;
use tracing::debug;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = IdentifierConfig::load(cli.config.as_deref())?;
    debug!(?config, "Starting");

    match cli.command {
        Commands::Analyze { file, mime } => handle_analyze_command(&config, file, mime).await,
        Commands::Capture { delay_ms, device } => {
            handle_capture_command(&config, delay_ms, device).await
        }
        Commands::Contact {
            name,
            email,
            message,
        } => handle_contact_command(&config, name, email, message).await,
        Commands::About => Ok(handle_about_command()),
    }
}
