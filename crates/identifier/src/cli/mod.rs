//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the identifier binary.

mod analyze;
mod commands;
mod pages;

pub use analyze::{handle_analyze_command, handle_capture_command};
pub use commands::{Cli, Commands};
pub use pages::{handle_about_command, handle_contact_command};
