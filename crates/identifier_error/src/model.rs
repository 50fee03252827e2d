//! Vision model error types.

/// Vision model error conditions.
///
/// Every kind is logged as-is but reaches the user as the same generic
/// message; see [`crate::UserFacing`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Failed to build the HTTP client
    #[display("Failed to create vision client: {}", _0)]
    ClientCreation(String),
    /// Request never produced a response (DNS, TLS, timeout, ...)
    #[display("Vision API request failed: {}", _0)]
    Transport(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response body did not match the expected schema
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),
    /// The model refused the prompt
    #[display("Prompt blocked: {}", _0)]
    Blocked(String),
    /// The response carried no text
    #[display("Vision model returned no text")]
    EmptyResponse,
}

/// Vision model error with source location tracking.
///
/// # Examples
///
/// ```
/// use identifier_error::{ModelError, ModelErrorKind};
///
/// let err = ModelError::new(ModelErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Model Error: {} at line {} in {}", kind, line, file)]
pub struct ModelError {
    /// The kind of error that occurred
    pub kind: ModelErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ModelError {
    /// Create a new ModelError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModelErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for vision model operations.
pub type ModelResult<T> = Result<T, ModelError>;
