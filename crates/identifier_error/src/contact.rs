//! Contact form error types.

/// Kinds of contact submission failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ContactErrorKind {
    /// A required field was blank
    #[display("Missing required field: {}", _0)]
    MissingField(&'static str),
    /// The email field is not an address
    #[display("Invalid email address: {}", _0)]
    InvalidEmail(String),
    /// Request never produced a response
    #[display("Contact request failed: {}", _0)]
    Transport(String),
    /// Endpoint answered with a non-2xx status
    #[display("Contact endpoint returned HTTP {}", _0)]
    Status(u16),
}

/// Contact error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Contact Error: {} at line {} in {}", kind, line, file)]
pub struct ContactError {
    /// The kind of error that occurred
    pub kind: ContactErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ContactError {
    /// Create a new contact error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ContactErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for contact operations.
pub type ContactResult<T> = Result<T, ContactError>;
