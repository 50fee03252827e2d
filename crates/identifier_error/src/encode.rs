//! Encoder error types.

/// Kinds of encoding failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum EncodeErrorKind {
    /// The asset has no bytes to encode
    #[display("Image asset is empty")]
    EmptyAsset,
    /// A data URL had no comma separating header and payload
    #[display("Malformed data URL: {}", _0)]
    MalformedDataUrl(String),
    /// The payload after the data URL prefix was empty
    #[display("No payload after data URL prefix")]
    MissingPayload,
    /// Base64 decoding failed
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
}

/// Encoder error with location tracking.
///
/// # Examples
///
/// ```
/// use identifier_error::{EncodeError, EncodeErrorKind};
///
/// let err = EncodeError::new(EncodeErrorKind::MissingPayload);
/// assert!(format!("{}", err).contains("No payload"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Encode Error: {} at line {} in {}", kind, line, file)]
pub struct EncodeError {
    /// The kind of error that occurred
    pub kind: EncodeErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl EncodeError {
    /// Create a new encode error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: EncodeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for encoder operations.
pub type EncodeResult<T> = Result<T, EncodeError>;
