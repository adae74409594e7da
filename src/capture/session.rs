// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Capture session lifecycle and single-frame snapshots

use image::RgbaImage;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info, warn};

use super::camera::{CameraDevice, VideoStream};
use super::image_utils::{data_uri_to_blob, frame_to_data_uri};
use super::types::{CaptureError, ImageBlob};

/// A live camera stream paired with the off-screen surface frames are drawn onto
pub struct CaptureSession {
    stream: Box<dyn VideoStream>,
    surface: RgbaImage,
}

impl CaptureSession {
    pub fn new(stream: Box<dyn VideoStream>) -> Self {
        Self {
            stream,
            surface: RgbaImage::new(0, 0),
        }
    }

    /// Grab the current frame as a PNG blob
    ///
    /// Returns `Ok(None)` when the stream has no decodable frame yet.
    pub fn capture(&mut self) -> Result<Option<ImageBlob>, CaptureError> {
        let (width, height) = self.stream.dimensions();
        if width == 0 || height == 0 {
            debug!("Video sink reports zero dimensions, nothing to capture");
            return Ok(None);
        }

        let Some(frame) = self.stream.current_frame() else {
            return Ok(None);
        };

        if self.surface.dimensions() != (width, height) {
            self.surface = RgbaImage::new(width, height);
        }
        image::imageops::replace(&mut self.surface, &frame, 0, 0);

        let data_uri = frame_to_data_uri(&self.surface)?;
        let blob = data_uri_to_blob(&data_uri)?;
        debug!(
            "Captured {}x{} frame ({} bytes, {})",
            width,
            height,
            blob.len(),
            blob.mime_type
        );
        Ok(Some(blob))
    }
}

/// Camera acquisition plus on-demand frame capture
///
/// The session is created at most once and reused across captures.
#[derive(Clone)]
pub struct MediaCapture {
    device: Arc<dyn CameraDevice>,
    session: Arc<Mutex<Option<CaptureSession>>>,
    started: Arc<AtomicBool>,
    last_error: Arc<Mutex<Option<String>>>,
}

impl MediaCapture {
    pub fn new(device: Arc<dyn CameraDevice>) -> Self {
        Self {
            device,
            session: Arc::new(Mutex::new(None)),
            started: Arc::new(AtomicBool::new(false)),
            last_error: Arc::new(Mutex::new(None)),
        }
    }

    /// Request camera access in the background
    ///
    /// Returns immediately; the stream becomes usable whenever the device
    /// grants access. Failures are logged and recorded in [`Self::last_error`],
    /// never returned. Returns `true` if a new acquisition was started.
    pub fn initialize(&self) -> bool {
        if self.started.swap(true, Ordering::SeqCst) {
            debug!("Camera already initialised or pending");
            return false;
        }

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                self.started.store(false, Ordering::SeqCst);
                self.record_error(format!("no async runtime for camera acquisition: {}", e));
                return false;
            }
        };

        info!("Initializing camera: device={}", self.device.name());
        let device = Arc::clone(&self.device);
        let session = Arc::clone(&self.session);
        let started = Arc::clone(&self.started);
        let last_error = Arc::clone(&self.last_error);

        handle.spawn(async move {
            match device.open().await {
                Ok(stream) => {
                    if let Ok(mut slot) = session.lock() {
                        *slot = Some(CaptureSession::new(stream));
                        info!("Camera stream is live");
                    }
                    if let Ok(mut err) = last_error.lock() {
                        *err = None;
                    }
                }
                Err(e) => {
                    let message = format!(
                        "There was an error with accessing the camera stream: {}",
                        e.name()
                    );
                    error!("{} ({})", message, e);
                    if let Ok(mut err) = last_error.lock() {
                        *err = Some(message);
                    }
                    // Allow a later initialize() to try again
                    started.store(false, Ordering::SeqCst);
                }
            }
        });

        true
    }

    /// Whether a stream has been bound
    pub fn is_ready(&self) -> bool {
        self.session
            .lock()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    /// Last camera acquisition error, if the most recent attempt failed
    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().ok().and_then(|err| err.clone())
    }

    /// Capture the frame visible right now
    ///
    /// Never waits for the camera: before the stream is live, or while the
    /// sink has zero dimensions, this yields `Ok(None)`.
    pub fn snapshot(&self) -> Result<Option<ImageBlob>, CaptureError> {
        let mut slot = match self.session.lock() {
            Ok(slot) => slot,
            Err(_) => {
                warn!("Capture session lock poisoned");
                return Ok(None);
            }
        };

        match slot.as_mut() {
            Some(session) => session.capture(),
            None => {
                debug!("Snapshot requested before camera initialisation");
                Ok(None)
            }
        }
    }

    fn record_error(&self, message: String) {
        warn!("{}", message);
        if let Ok(mut err) = self.last_error.lock() {
            *err = Some(message);
        }
    }
}
