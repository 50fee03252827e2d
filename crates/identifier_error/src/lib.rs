//! Error types for the Object Identifier workspace.
//!
//! Each concern owns a `*Error` struct that records where it was created and
//! a `*ErrorKind` enum describing what went wrong. [`IdentifierError`] wraps
//! any of them for callers that cross concerns.
//!
//! Errors shown to a person never carry the technical detail: every kind maps
//! to one of four fixed messages through [`UserFacing`].

mod capture;
mod config;
mod contact;
mod encode;
mod model;

pub use capture::{CaptureError, CaptureErrorKind, CaptureResult};
pub use config::ConfigError;
pub use contact::{ContactError, ContactErrorKind, ContactResult};
pub use encode::{EncodeError, EncodeErrorKind, EncodeResult};
pub use model::{ModelError, ModelErrorKind, ModelResult};

/// Shown when the camera cannot be opened or read.
pub const CAMERA_FAILURE_MESSAGE: &str =
    "Failed to access camera. Please make sure you have granted camera permissions.";

/// Shown when the selected image cannot be turned into a payload.
pub const ENCODE_FAILURE_MESSAGE: &str = "Failed to process image";

/// Shown for every vision model failure, whatever its cause.
pub const ANALYSIS_FAILURE_MESSAGE: &str = "Failed to analyze image. Please try again.";

/// Shown when the contact form cannot be delivered.
pub const CONTACT_FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";

/// Errors that can be rendered inline to the user.
pub trait UserFacing {
    /// The fixed message displayed for this error.
    fn user_message(&self) -> &'static str;
}

impl UserFacing for CaptureError {
    fn user_message(&self) -> &'static str {
        if self.kind.is_device_access() {
            CAMERA_FAILURE_MESSAGE
        } else {
            ENCODE_FAILURE_MESSAGE
        }
    }
}

impl UserFacing for EncodeError {
    fn user_message(&self) -> &'static str {
        ENCODE_FAILURE_MESSAGE
    }
}

impl UserFacing for ModelError {
    fn user_message(&self) -> &'static str {
        ANALYSIS_FAILURE_MESSAGE
    }
}

impl UserFacing for ContactError {
    fn user_message(&self) -> &'static str {
        CONTACT_FAILURE_MESSAGE
    }
}

/// Identifier error variants.
#[derive(Debug, derive_more::From)]
pub enum IdentifierErrorKind {
    /// Configuration error
    Config(ConfigError),
    /// Image source error
    Capture(CaptureError),
    /// Encoder error
    Encode(EncodeError),
    /// Vision model error
    Model(ModelError),
    /// Contact submission error
    Contact(ContactError),
}

impl std::fmt::Display for IdentifierErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentifierErrorKind::Config(e) => write!(f, "{}", e),
            IdentifierErrorKind::Capture(e) => write!(f, "{}", e),
            IdentifierErrorKind::Encode(e) => write!(f, "{}", e),
            IdentifierErrorKind::Model(e) => write!(f, "{}", e),
            IdentifierErrorKind::Contact(e) => write!(f, "{}", e),
        }
    }
}

/// Identifier error with kind discrimination.
#[derive(Debug)]
pub struct IdentifierError(Box<IdentifierErrorKind>);

impl IdentifierError {
    /// Create a new error from a kind.
    pub fn new(kind: IdentifierErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &IdentifierErrorKind {
        &self.0
    }
}

impl std::fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Identifier Error: {}", self.0)
    }
}

impl std::error::Error for IdentifierError {}

// Generic From implementation for any type that converts to IdentifierErrorKind
impl<T> From<T> for IdentifierError
where
    T: Into<IdentifierErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Identifier operations.
pub type IdentifierResult<T> = std::result::Result<T, IdentifierError>;
