//! Camera snapshot capture.
//!
//! Capture waits a fixed delay after opening the stream; it does not wait
//! for the first ready frame. The stream is released as soon as the frame is
//! grabbed, and also if the capture future is dropped during the delay.
//!
//! [`MediaStream`] calls may block, so they never run on an async worker.

use crate::snapshot::{CAMERA_FILE_NAME, DEFAULT_JPEG_QUALITY, encode_jpeg};
use async_trait::async_trait;
use identifier_core::ImageAsset;
use identifier_error::{CaptureError, CaptureErrorKind, CaptureResult};
use std::time::Duration;
use tokio::runtime::{Handle, RuntimeFlavor};
use tracing::{debug, info, instrument, warn};

/// Delay between opening the camera and grabbing the frame.
pub const DEFAULT_CAPTURE_DELAY: Duration = Duration::from_secs(3);

/// A single RGB8 video frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    rgb: Vec<u8>,
}

impl Frame {
    /// Wraps packed RGB bytes.
    ///
    /// # Errors
    ///
    /// Fails if `rgb` is not exactly `width * height * 3` bytes long.
    pub fn new(width: u32, height: u32, rgb: Vec<u8>) -> CaptureResult<Self> {
        let expected = width as usize * height as usize * 3;
        if rgb.len() != expected {
            return Err(CaptureError::new(CaptureErrorKind::FrameGrab(format!(
                "{}x{} frame needs {} bytes, got {}",
                width,
                height,
                expected,
                rgb.len()
            ))));
        }
        Ok(Self { width, height, rgb })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Packed RGB bytes, row-major.
    pub fn rgb(&self) -> &[u8] {
        &self.rgb
    }
}

/// An open video stream.
///
/// Both methods may block until the device answers.
pub trait MediaStream: Send {
    /// Reads the current frame.
    fn grab_frame(&mut self) -> CaptureResult<Frame>;

    /// Stops every track of the stream. Must be idempotent.
    fn stop_all_tracks(&mut self);
}

/// A camera that can be asked for a stream.
#[async_trait]
pub trait CameraDevice: Send + Sync {
    /// Requests access and opens a video stream.
    ///
    /// Permission denial and missing hardware are reported here.
    async fn open(&self) -> CaptureResult<Box<dyn MediaStream>>;

    /// Human-readable device name for logs.
    fn name(&self) -> &str;
}

/// Device used when no camera backend is compiled in.
#[derive(Debug, Clone, Default)]
pub struct UnavailableCamera;

#[async_trait]
impl CameraDevice for UnavailableCamera {
    async fn open(&self) -> CaptureResult<Box<dyn MediaStream>> {
        Err(CaptureError::new(CaptureErrorKind::DeviceUnavailable(
            "no camera backend compiled in (enable the `webcam` feature)".to_string(),
        )))
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}

/// Snapshot tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureOptions {
    /// Fixed wait between opening the stream and grabbing the frame
    pub delay: Duration,
    /// JPEG quality, 1-100
    pub jpeg_quality: u8,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            delay: DEFAULT_CAPTURE_DELAY,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Owns an open stream and stops its tracks on every exit path.
struct StreamGuard {
    stream: Option<Box<dyn MediaStream>>,
}

impl StreamGuard {
    fn new(stream: Box<dyn MediaStream>) -> Self {
        Self {
            stream: Some(stream),
        }
    }

    /// Grabs one frame, then releases the stream whatever the outcome.
    fn grab_and_release(mut self) -> CaptureResult<Frame> {
        let Some(mut stream) = self.stream.take() else {
            return Err(CaptureError::new(CaptureErrorKind::FrameGrab(
                "stream already released".to_string(),
            )));
        };
        let frame = stream.grab_frame();
        stream.stop_all_tracks();
        debug!("Camera tracks stopped after frame grab");
        frame
    }
}

impl Drop for StreamGuard {
    fn drop(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            warn!("Capture abandoned before frame grab; stopping camera tracks");
            let multi_thread = Handle::try_current()
                .map(|handle| handle.runtime_flavor() == RuntimeFlavor::MultiThread)
                .unwrap_or(false);
            if multi_thread {
                tokio::task::block_in_place(|| stream.stop_all_tracks());
            } else {
                stream.stop_all_tracks();
            }
        }
    }
}

/// Takes a JPEG snapshot from the camera.
///
/// Opens the device, waits `options.delay`, grabs the current frame and
/// stops all tracks before encoding. No retry is attempted on failure.
///
/// # Errors
///
/// Returns a device-access error if the camera cannot be opened or read.
#[instrument(
    skip(device),
    fields(device = device.name(), delay_ms = options.delay.as_millis() as u64)
)]
pub async fn capture_from_camera(
    device: &dyn CameraDevice,
    options: CaptureOptions,
) -> CaptureResult<ImageAsset> {
    let stream = device.open().await.map_err(|e| {
        warn!(error = %e, "Camera access failed");
        e
    })?;
    let guard = StreamGuard::new(stream);
    debug!("Camera stream open, waiting before grab");

    tokio::time::sleep(options.delay).await;

    let frame = tokio::task::spawn_blocking(move || guard.grab_and_release())
        .await
        .map_err(|e| {
            CaptureError::new(CaptureErrorKind::FrameGrab(format!(
                "frame grab task failed: {}",
                e
            )))
        })??;
    let jpeg = encode_jpeg(&frame, options.jpeg_quality)?;

    info!(
        width = frame.width(),
        height = frame.height(),
        bytes = jpeg.len(),
        "Captured camera snapshot"
    );

    Ok(ImageAsset::new(jpeg, "image/jpeg").with_name(Some(CAMERA_FILE_NAME.to_string())))
}
