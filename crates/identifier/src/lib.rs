//! Object Identifier: pick a photo or take a camera snapshot, ask a vision
//! model what is in it, and show the answer.
//!
//! This crate re-exports the workspace crates and adds the pieces a front
//! end needs on top of them: layered configuration and logging setup.
//!
//! # Example
//!
//! ```no_run
//! use identifier::{
//!     AnalysisSession, FileHandle, GeminiVisionClient, IdentifierConfig, api_key_from_env,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IdentifierConfig::load(None)?;
//! let client = GeminiVisionClient::new(config.gemini_settings(api_key_from_env()?)?)?;
//! let session = AnalysisSession::new(client, config.model().prompt().as_str());
//!
//! session.upload(&FileHandle::new("mug.jpg")).await;
//! session.analyze().await;
//! println!("{}", session.view());
//! # Ok(())
//! # }
//! ```

mod logging;
mod settings;

pub use logging::init_logging;
pub use settings::{
    CONFIG_FILE, CaptureConfig, ContactConfig, ENV_PREFIX, IdentifierConfig, ModelConfig,
};

pub use identifier_capture::*;
pub use identifier_contact::*;
pub use identifier_core::*;
pub use identifier_error::*;
pub use identifier_models::*;
pub use identifier_session::*;
