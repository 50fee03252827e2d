//! JPEG encoding of grabbed frames.

use crate::Frame;
use identifier_error::{CaptureError, CaptureErrorKind, CaptureResult};
use image::ExtendedColorType;
use image::codecs::jpeg::JpegEncoder;

/// File name given to camera snapshots.
pub const CAMERA_FILE_NAME: &str = "camera-photo.jpg";

/// JPEG quality used when none is configured.
pub const DEFAULT_JPEG_QUALITY: u8 = 92;

/// Encodes an RGB frame as JPEG.
///
/// # Errors
///
/// Fails for zero-sized frames and for encoder errors.
pub fn encode_jpeg(frame: &Frame, quality: u8) -> CaptureResult<Vec<u8>> {
    if frame.width() == 0 || frame.height() == 0 {
        return Err(CaptureError::new(CaptureErrorKind::FrameGrab(format!(
            "empty frame {}x{}",
            frame.width(),
            frame.height()
        ))));
    }

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, quality.clamp(1, 100))
        .encode(
            frame.rgb(),
            frame.width(),
            frame.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| CaptureError::new(CaptureErrorKind::SnapshotEncoding(e.to_string())))?;
    Ok(jpeg)
}
