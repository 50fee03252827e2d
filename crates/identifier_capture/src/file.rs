//! User-selected image files.

use identifier_core::{ImageAsset, OCTET_STREAM};
use identifier_error::{CaptureError, CaptureErrorKind, CaptureResult};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Accept filter applied to declared MIME types.
pub const ACCEPT_FILTER: &str = "image/*";

/// A file chosen by the user, with the MIME type it claims to have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    path: PathBuf,
    declared_mime: String,
}

impl FileHandle {
    /// Handle whose MIME type is guessed from the file extension.
    ///
    /// Unknown extensions declare `application/octet-stream`, which the
    /// accept filter then rejects.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let declared_mime = mime_from_extension(&path);
        Self {
            path,
            declared_mime,
        }
    }

    /// Handle with an explicitly declared MIME type.
    pub fn with_mime(path: impl Into<PathBuf>, mime: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            declared_mime: mime.into(),
        }
    }

    /// Path of the selected file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// MIME type the file is declared as.
    pub fn declared_mime(&self) -> &str {
        &self.declared_mime
    }

    fn file_name(&self) -> Option<String> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }
}

fn mime_from_extension(path: &Path) -> String {
    image::ImageFormat::from_path(path)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| OCTET_STREAM.to_string())
}

/// Whether a declared MIME type passes [`ACCEPT_FILTER`].
///
/// # Examples
///
/// ```
/// use identifier_capture::accepts;
///
/// assert!(accepts("image/png"));
/// assert!(accepts("IMAGE/HEIC"));
/// assert!(!accepts("application/pdf"));
/// ```
pub fn accepts(mime: &str) -> bool {
    mime.to_ascii_lowercase().starts_with("image/")
}

/// Reads the selected file into an asset.
///
/// The bytes are not inspected; whatever the file contains is wrapped with
/// its declared MIME type.
///
/// # Errors
///
/// Fails if the declared type is outside the accept filter or the file
/// cannot be read.
#[instrument(skip(handle), fields(path = %handle.path().display(), mime = %handle.declared_mime()))]
pub async fn pick_from_file(handle: &FileHandle) -> CaptureResult<ImageAsset> {
    if !accepts(handle.declared_mime()) {
        warn!("Declared type rejected by accept filter");
        return Err(CaptureError::new(CaptureErrorKind::Rejected {
            declared: handle.declared_mime().to_string(),
            accept: ACCEPT_FILTER.to_string(),
        }));
    }

    let bytes = tokio::fs::read(handle.path()).await.map_err(|e| {
        warn!(error = %e, "Failed to read selected file");
        CaptureError::new(CaptureErrorKind::FileRead {
            path: handle.path().display().to_string(),
            message: e.to_string(),
        })
    })?;

    debug!(bytes = bytes.len(), "Read selected file");

    Ok(ImageAsset::new(bytes, handle.declared_mime()).with_name(handle.file_name()))
}
