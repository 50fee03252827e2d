//! Image sources for Object Identifier.
//!
//! Two ways to obtain an [`ImageAsset`](identifier_core::ImageAsset):
//!
//! - [`pick_from_file`] reads a user-selected file and trusts its declared
//!   MIME type (only the `image/*` accept filter is applied).
//! - [`capture_from_camera`] opens a [`CameraDevice`], waits a fixed delay,
//!   grabs one frame and releases the device before encoding it as JPEG.

mod camera;
mod file;
mod snapshot;
#[cfg(feature = "webcam")]
mod webcam;

pub use camera::{
    CameraDevice, CaptureOptions, DEFAULT_CAPTURE_DELAY, Frame, MediaStream, UnavailableCamera,
    capture_from_camera,
};
pub use file::{ACCEPT_FILTER, FileHandle, accepts, pick_from_file};
pub use snapshot::{CAMERA_FILE_NAME, DEFAULT_JPEG_QUALITY, encode_jpeg};
#[cfg(feature = "webcam")]
pub use webcam::Webcam;
