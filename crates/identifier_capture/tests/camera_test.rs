//! Camera capture tests against a scripted device.

use async_trait::async_trait;
use identifier_capture::{
    CAMERA_FILE_NAME, CameraDevice, CaptureOptions, DEFAULT_CAPTURE_DELAY, Frame, MediaStream,
    UnavailableCamera, capture_from_camera,
};
use identifier_error::{CAMERA_FAILURE_MESSAGE, CaptureErrorKind, CaptureResult, UserFacing};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

#[derive(Clone, Copy)]
enum Script {
    Deliver,
    FailGrab,
    DenyPermission,
}

struct ScriptedCamera {
    script: Script,
    opened: Arc<AtomicUsize>,
    stopped: Arc<AtomicUsize>,
}

impl ScriptedCamera {
    fn new(script: Script) -> Self {
        Self {
            script,
            opened: Arc::new(AtomicUsize::new(0)),
            stopped: Arc::new(AtomicUsize::new(0)),
        }
    }
}

struct ScriptedStream {
    script: Script,
    stopped: Arc<AtomicUsize>,
    live: bool,
}

impl MediaStream for ScriptedStream {
    fn grab_frame(&mut self) -> CaptureResult<Frame> {
        assert!(self.live, "frame grabbed from a stopped stream");
        match self.script {
            Script::FailGrab => Err(identifier_error::CaptureError::new(
                CaptureErrorKind::FrameGrab("sensor timeout".to_string()),
            )),
            _ => Frame::new(4, 2, vec![128; 4 * 2 * 3]),
        }
    }

    fn stop_all_tracks(&mut self) {
        if self.live {
            self.live = false;
            self.stopped.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[async_trait]
impl CameraDevice for ScriptedCamera {
    async fn open(&self) -> CaptureResult<Box<dyn MediaStream>> {
        if let Script::DenyPermission = self.script {
            return Err(identifier_error::CaptureError::new(
                CaptureErrorKind::PermissionDenied("user dismissed prompt".to_string()),
            ));
        }
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(ScriptedStream {
            script: self.script,
            stopped: Arc::clone(&self.stopped),
            live: true,
        }))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Camera whose frame only arrives once the test releases it.
struct HandshakeCamera {
    entered: Arc<Notify>,
    release: Mutex<Option<Receiver<()>>>,
}

struct HandshakeStream {
    entered: Arc<Notify>,
    release: Receiver<()>,
}

impl MediaStream for HandshakeStream {
    fn grab_frame(&mut self) -> CaptureResult<Frame> {
        self.entered.notify_one();
        self.release
            .recv_timeout(Duration::from_secs(2))
            .map_err(|_| {
                identifier_error::CaptureError::new(CaptureErrorKind::FrameGrab(
                    "frame never released".to_string(),
                ))
            })?;
        Frame::new(2, 2, vec![64; 2 * 2 * 3])
    }

    fn stop_all_tracks(&mut self) {}
}

#[async_trait]
impl CameraDevice for HandshakeCamera {
    async fn open(&self) -> CaptureResult<Box<dyn MediaStream>> {
        let release = self
            .release
            .lock()
            .expect("Lock release slot")
            .take()
            .expect("Camera opened once");
        Ok(Box::new(HandshakeStream {
            entered: Arc::clone(&self.entered),
            release,
        }))
    }

    fn name(&self) -> &str {
        "handshake"
    }
}

#[tokio::test(start_paused = true)]
async fn test_capture_produces_jpeg_asset_and_stops_tracks() {
    let camera = ScriptedCamera::new(Script::Deliver);

    let asset = capture_from_camera(&camera, CaptureOptions::default())
        .await
        .expect("Capture succeeds");

    assert_eq!(asset.mime(), "image/jpeg");
    assert_eq!(asset.name().as_deref(), Some(CAMERA_FILE_NAME));
    assert_eq!(&asset.bytes()[..2], &[0xFF, 0xD8]);
    assert_eq!(camera.opened.load(Ordering::SeqCst), 1);
    assert_eq!(camera.stopped.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_capture_waits_fixed_delay() {
    let camera = ScriptedCamera::new(Script::Deliver);
    let started = tokio::time::Instant::now();

    capture_from_camera(&camera, CaptureOptions::default())
        .await
        .expect("Capture succeeds");

    assert!(started.elapsed() >= DEFAULT_CAPTURE_DELAY);
}

#[tokio::test(start_paused = true)]
async fn test_failed_grab_still_stops_tracks() {
    let camera = ScriptedCamera::new(Script::FailGrab);

    let err = capture_from_camera(&camera, CaptureOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err.kind, CaptureErrorKind::FrameGrab(_)));
    assert_eq!(camera.stopped.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_abandoned_capture_releases_camera() {
    let camera = ScriptedCamera::new(Script::Deliver);

    let outcome = tokio::time::timeout(
        Duration::from_secs(1),
        capture_from_camera(&camera, CaptureOptions::default()),
    )
    .await;

    assert!(outcome.is_err(), "capture should still be waiting");
    assert_eq!(camera.stopped.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_blocking_grab_leaves_runtime_free() {
    let (tx, rx) = mpsc::channel();
    let entered = Arc::new(Notify::new());
    let camera = HandshakeCamera {
        entered: Arc::clone(&entered),
        release: Mutex::new(Some(rx)),
    };
    let options = CaptureOptions {
        delay: Duration::ZERO,
        ..CaptureOptions::default()
    };

    let (captured, _) = tokio::join!(capture_from_camera(&camera, options), async {
        entered.notified().await;
        tx.send(()).expect("Release frame");
    });

    let asset = captured.expect("Capture succeeds while the grab blocks");
    assert_eq!(asset.mime(), "image/jpeg");
}

#[tokio::test(start_paused = true)]
async fn test_permission_denied_reports_camera_error() {
    let camera = ScriptedCamera::new(Script::DenyPermission);

    let err = capture_from_camera(&camera, CaptureOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err.kind, CaptureErrorKind::PermissionDenied(_)));
    assert_eq!(err.user_message(), CAMERA_FAILURE_MESSAGE);
    assert_eq!(camera.opened.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unavailable_camera_fails_without_waiting() {
    let options = CaptureOptions {
        delay: Duration::from_secs(3600),
        ..CaptureOptions::default()
    };

    let err = capture_from_camera(&UnavailableCamera, options)
        .await
        .unwrap_err();

    assert!(matches!(err.kind, CaptureErrorKind::DeviceUnavailable(_)));
}
