//! CLI argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Identify the objects in a photo with a vision model.
#[derive(Parser, Debug)]
#[command(name = "identifier")]
#[command(version, about)]
pub struct Cli {
    /// Path to a TOML configuration file (default: ./identifier.toml if present)
    #[arg(short, long, global = true, env = "IDENTIFIER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze an image file
    Analyze {
        /// Image to analyze
        file: PathBuf,

        /// Declared MIME type (default: guessed from the extension)
        #[arg(long)]
        mime: Option<String>,
    },

    /// Take a webcam snapshot and analyze it
    Capture {
        /// Milliseconds to wait before grabbing the frame (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Camera index
        #[arg(long, default_value_t = 0)]
        device: u32,
    },

    /// Send a message through the contact form
    Contact {
        /// Your name
        #[arg(long)]
        name: String,

        /// Your email address
        #[arg(long)]
        email: String,

        /// Message text
        #[arg(long)]
        message: String,
    },

    /// Show the About page
    About,
}
