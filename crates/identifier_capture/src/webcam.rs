//! Native webcam backend built on nokhwa.
//!
//! nokhwa cameras are not `Send` on every platform, so each opened stream
//! lives on its own thread and is driven over a command channel.

use crate::{CameraDevice, Frame, MediaStream};
use async_trait::async_trait;
use identifier_error::{CaptureError, CaptureErrorKind, CaptureResult};
use nokhwa::Camera;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use std::sync::mpsc;
use std::thread;
use tokio::sync::oneshot;
use tracing::{debug, warn};

enum Command {
    Grab(mpsc::Sender<CaptureResult<Frame>>),
    Stop(mpsc::Sender<()>),
}

/// A local webcam addressed by index.
#[derive(Debug, Clone)]
pub struct Webcam {
    index: u32,
    name: String,
}

impl Webcam {
    /// Webcam at the given platform index (0 is usually the built-in camera).
    pub fn new(index: u32) -> Self {
        Self {
            index,
            name: format!("webcam #{}", index),
        }
    }
}

#[async_trait]
impl CameraDevice for Webcam {
    async fn open(&self) -> CaptureResult<Box<dyn MediaStream>> {
        let index = self.index;
        let (ready_tx, ready_rx) = oneshot::channel();
        let (command_tx, command_rx) = mpsc::channel();

        thread::Builder::new()
            .name(format!("webcam-{}", index))
            .spawn(move || run_camera(index, ready_tx, command_rx))
            .map_err(|e| {
                CaptureError::new(CaptureErrorKind::DeviceUnavailable(format!(
                    "failed to spawn camera thread: {}",
                    e
                )))
            })?;

        ready_rx.await.map_err(|_| {
            CaptureError::new(CaptureErrorKind::DeviceUnavailable(
                "camera thread exited before opening".to_string(),
            ))
        })??;

        debug!(index, "Webcam stream opened");
        Ok(Box::new(WebcamStream {
            commands: Some(command_tx),
        }))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

struct WebcamStream {
    commands: Option<mpsc::Sender<Command>>,
}

impl MediaStream for WebcamStream {
    fn grab_frame(&mut self) -> CaptureResult<Frame> {
        let commands = self.commands.as_ref().ok_or_else(|| {
            CaptureError::new(CaptureErrorKind::FrameGrab("stream stopped".to_string()))
        })?;
        let (reply_tx, reply_rx) = mpsc::channel();
        commands
            .send(Command::Grab(reply_tx))
            .map_err(|_| lost_thread())?;
        reply_rx.recv().map_err(|_| lost_thread())?
    }

    fn stop_all_tracks(&mut self) {
        let Some(commands) = self.commands.take() else {
            return;
        };
        let (ack_tx, ack_rx) = mpsc::channel();
        if commands.send(Command::Stop(ack_tx)).is_ok() {
            // Wait until the device is actually released.
            let _ = ack_rx.recv();
        }
    }
}

impl Drop for WebcamStream {
    fn drop(&mut self) {
        self.stop_all_tracks();
    }
}

fn run_camera(
    index: u32,
    ready: oneshot::Sender<CaptureResult<()>>,
    commands: mpsc::Receiver<Command>,
) {
    let requested =
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);
    let opened = Camera::new(CameraIndex::Index(index), requested).and_then(|mut camera| {
        camera.open_stream()?;
        Ok(camera)
    });

    let mut camera = match opened {
        Ok(camera) => camera,
        Err(e) => {
            let _ = ready.send(Err(classify_open_error(&e.to_string())));
            return;
        }
    };
    let _ = ready.send(Ok(()));

    let mut ack = None;
    for command in commands.iter() {
        match command {
            Command::Grab(reply) => {
                let _ = reply.send(grab(&mut camera));
            }
            Command::Stop(reply) => {
                ack = Some(reply);
                break;
            }
        }
    }

    if let Err(e) = camera.stop_stream() {
        warn!(index, error = %e, "Failed to stop webcam stream");
    }
    if let Some(ack) = ack {
        let _ = ack.send(());
    }
}

fn grab(camera: &mut Camera) -> CaptureResult<Frame> {
    let buffer = camera
        .frame()
        .map_err(|e| CaptureError::new(CaptureErrorKind::FrameGrab(e.to_string())))?;
    let decoded = buffer
        .decode_image::<RgbFormat>()
        .map_err(|e| CaptureError::new(CaptureErrorKind::FrameGrab(e.to_string())))?;
    let (width, height) = (decoded.width(), decoded.height());
    Frame::new(width, height, decoded.into_raw())
}

fn classify_open_error(message: &str) -> CaptureError {
    let lower = message.to_ascii_lowercase();
    if lower.contains("permission") || lower.contains("denied") {
        CaptureError::new(CaptureErrorKind::PermissionDenied(message.to_string()))
    } else {
        CaptureError::new(CaptureErrorKind::DeviceUnavailable(message.to_string()))
    }
}

fn lost_thread() -> CaptureError {
    CaptureError::new(CaptureErrorKind::FrameGrab(
        "camera thread stopped unexpectedly".to_string(),
    ))
}
