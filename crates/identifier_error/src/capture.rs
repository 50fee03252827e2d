//! Image source error types (file picking and camera capture).

/// Kinds of image source failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CaptureErrorKind {
    /// The user or the platform refused camera access
    #[display("Camera permission denied: {}", _0)]
    PermissionDenied(String),
    /// No camera could be opened
    #[display("Camera unavailable: {}", _0)]
    DeviceUnavailable(String),
    /// The stream was open but no usable frame could be read
    #[display("Frame grab failed: {}", _0)]
    FrameGrab(String),
    /// The grabbed frame could not be encoded as JPEG
    #[display("Snapshot encoding failed: {}", _0)]
    SnapshotEncoding(String),
    /// The selected file could not be read
    #[display("Failed to read {}: {}", path, message)]
    FileRead {
        /// Path of the selected file
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// The declared type of the selected file is outside the accept filter
    #[display("File type {} is not accepted (expected {})", declared, accept)]
    Rejected {
        /// MIME type declared for the file
        declared: String,
        /// Accept filter that was applied
        accept: String,
    },
}

impl CaptureErrorKind {
    /// Whether this failure came from the camera device rather than a file.
    pub fn is_device_access(&self) -> bool {
        matches!(
            self,
            CaptureErrorKind::PermissionDenied(_)
                | CaptureErrorKind::DeviceUnavailable(_)
                | CaptureErrorKind::FrameGrab(_)
                | CaptureErrorKind::SnapshotEncoding(_)
        )
    }
}

/// Image source error with location tracking.
///
/// # Examples
///
/// ```
/// use identifier_error::{CaptureError, CaptureErrorKind};
///
/// let err = CaptureError::new(CaptureErrorKind::PermissionDenied("blocked".to_string()));
/// assert!(err.kind.is_device_access());
/// assert!(format!("{}", err).contains("permission denied"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Capture Error: {} at line {} in {}", kind, line, file)]
pub struct CaptureError {
    /// The kind of error that occurred
    pub kind: CaptureErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CaptureError {
    /// Create a new capture error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CaptureErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for image source operations.
pub type CaptureResult<T> = Result<T, CaptureError>;
