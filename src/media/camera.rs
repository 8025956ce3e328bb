// SPDX-License-Identifier: MPL-2.0
//! Webcam capture session.
//!
//! The camera sub-flow is a two-state machine: closed (no session) and open
//! (a [`CameraSession`] exists). A session owns a dedicated thread that holds
//! the device, publishes the most recent frame for live preview, and tears
//! the stream down when the stop flag is raised. Dropping the session stops
//! the stream and joins the thread, so the device is always released on
//! close or application teardown.

use crate::app::config::defaults::CAPTURE_JPEG_QUALITY;
use crate::error::{Error, MediaAccessError, Result};
use crate::media::Photo;
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::ImageEncoder as _;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;
use std::io::Cursor;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, warn};

/// Pacing of the grab loop. Preview only; capture quality is unaffected.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Lifecycle of the capture feed, observed by the UI on each tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedStatus {
    /// Device open is still in progress on the session thread.
    Opening,
    /// Frames are flowing.
    Streaming { width: u32, height: u32 },
    /// The device could not be opened; the session is inert.
    Failed(MediaAccessError),
}

/// Most recent decoded frame, in RGBA order for direct display.
#[derive(Debug, Clone)]
pub struct PreviewFrame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

struct Shared {
    status: Mutex<FeedStatus>,
    frame: Mutex<Option<PreviewFrame>>,
}

/// An open camera. Exists only while the camera sub-flow is in its open
/// state; closing the sub-flow drops the session.
pub struct CameraSession {
    shared: Arc<Shared>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for CameraSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraSession")
            .field("status", &self.status())
            .finish_non_exhaustive()
    }
}

impl CameraSession {
    /// Opens the default camera device.
    ///
    /// Returns immediately; the actual device open happens on the session
    /// thread and is reported through [`status`](Self::status). Failures
    /// surface as [`FeedStatus::Failed`] with a categorized
    /// [`MediaAccessError`].
    pub fn open() -> Self {
        let shared = Arc::new(Shared {
            status: Mutex::new(FeedStatus::Opening),
            frame: Mutex::new(None),
        });
        let stop = Arc::new(AtomicBool::new(false));

        let thread_shared = Arc::clone(&shared);
        let thread_stop = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name("camera-feed".into())
            .spawn(move || run_feed(&thread_shared, &thread_stop))
            .ok();

        if handle.is_none() {
            *shared.status.lock().unwrap() = FeedStatus::Failed(
                MediaAccessError::DeviceUnavailable,
            );
        }

        Self {
            shared,
            stop,
            handle,
        }
    }

    /// Current lifecycle state of the feed.
    pub fn status(&self) -> FeedStatus {
        self.shared.status.lock().unwrap().clone()
    }

    /// The most recent preview frame, if any arrived yet.
    pub fn preview_frame(&self) -> Option<PreviewFrame> {
        self.shared.frame.lock().unwrap().clone()
    }

    /// Encodes the current frame as a JPEG photo with a timestamped name.
    ///
    /// Fails with [`MediaAccessError::CaptureFailed`] when no frame is
    /// available yet or encoding fails.
    pub fn capture(&self) -> Result<Photo> {
        let frame = self
            .preview_frame()
            .ok_or(Error::MediaAccess(MediaAccessError::CaptureFailed(
                "no frame available".to_string(),
            )))?;
        encode_capture(&frame)
    }

    /// Stops the stream and joins the session thread.
    ///
    /// Dropping the session has the same effect; this method only makes the
    /// release explicit at call sites.
    pub fn close(self) {}
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Session thread body: open device, stream frames, release on stop.
fn run_feed(shared: &Shared, stop: &AtomicBool) {
    let requested =
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);

    let mut camera = match Camera::new(CameraIndex::Index(0), requested) {
        Ok(camera) => camera,
        Err(e) => {
            warn!(error = %e, "camera device open failed");
            *shared.status.lock().unwrap() =
                FeedStatus::Failed(MediaAccessError::from_message(&e.to_string()));
            return;
        }
    };

    if let Err(e) = camera.open_stream() {
        warn!(error = %e, "camera stream open failed");
        *shared.status.lock().unwrap() =
            FeedStatus::Failed(MediaAccessError::from_message(&e.to_string()));
        return;
    }

    let resolution = camera.resolution();
    debug!(
        width = resolution.width(),
        height = resolution.height(),
        "camera streaming"
    );
    *shared.status.lock().unwrap() = FeedStatus::Streaming {
        width: resolution.width(),
        height: resolution.height(),
    };

    while !stop.load(Ordering::SeqCst) {
        match camera.frame().and_then(|b| b.decode_image::<RgbFormat>()) {
            Ok(decoded) => {
                let (width, height) = decoded.dimensions();
                let rgba = rgb_to_rgba(decoded.as_raw());
                *shared.frame.lock().unwrap() = Some(PreviewFrame {
                    width,
                    height,
                    rgba,
                });
            }
            Err(e) => {
                // A single bad frame is not fatal; keep the previous one.
                debug!(error = %e, "frame grab failed");
            }
        }
        thread::sleep(FRAME_INTERVAL);
    }

    let _ = camera.stop_stream();
    debug!("camera stream released");
}

/// Expands packed RGB bytes to RGBA with full opacity.
fn rgb_to_rgba(rgb: &[u8]) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(rgb.len() / 3 * 4);
    for px in rgb.chunks_exact(3) {
        rgba.extend_from_slice(px);
        rgba.push(u8::MAX);
    }
    rgba
}

/// Encodes a preview frame as a JPEG [`Photo`].
fn encode_capture(frame: &PreviewFrame) -> Result<Photo> {
    // Drop the alpha channel the preview carries for display.
    let rgb: Vec<u8> = frame
        .rgba
        .chunks_exact(4)
        .flat_map(|px| px[..3].to_vec())
        .collect();

    let mut out = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut out, CAPTURE_JPEG_QUALITY);
    encoder
        .write_image(
            &rgb,
            frame.width,
            frame.height,
            image_rs::ExtendedColorType::Rgb8,
        )
        .map_err(|e| Error::MediaAccess(MediaAccessError::CaptureFailed(e.to_string())))?;

    let file_name = format!(
        "camera-{}.jpg",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    );

    Ok(Photo {
        file_name,
        mime_type: "image/jpeg".to_string(),
        bytes: out.into_inner(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_frame(width: u32, height: u32) -> PreviewFrame {
        let mut rgba = Vec::new();
        for _ in 0..(width * height) {
            rgba.extend_from_slice(&[200, 120, 40, 255]);
        }
        PreviewFrame {
            width,
            height,
            rgba,
        }
    }

    #[test]
    fn rgb_to_rgba_expands_pixels() {
        let rgba = rgb_to_rgba(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(rgba, vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    fn encode_capture_produces_jpeg_photo() {
        let photo = encode_capture(&solid_frame(8, 8)).expect("encode");
        assert_eq!(photo.mime_type, "image/jpeg");
        assert!(photo.file_name.starts_with("camera-"));
        assert!(photo.file_name.ends_with(".jpg"));
        assert_eq!(
            image_rs::guess_format(&photo.bytes).expect("sniff"),
            image_rs::ImageFormat::Jpeg
        );
    }

    #[test]
    fn capture_without_frame_fails() {
        // A session whose thread has not produced a frame yet (or failed to
        // open at all) must refuse to capture rather than panic.
        let session = CameraSession::open();
        if session.preview_frame().is_none() {
            assert!(matches!(
                session.capture(),
                Err(Error::MediaAccess(MediaAccessError::CaptureFailed(_)))
            ));
        }
        session.close();
    }

    #[test]
    fn session_close_joins_cleanly() {
        // Regardless of whether a device exists in the test environment,
        // closing must stop the thread and return.
        let session = CameraSession::open();
        std::thread::sleep(Duration::from_millis(50));
        let _ = session.status();
        session.close();
    }
}
