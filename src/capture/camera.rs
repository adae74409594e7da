// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Camera device abstraction
//!
//! The host's media capture capability is modelled by two traits:
//! [`CameraDevice`] requests a stream, [`VideoStream`] exposes the live frame.

use async_trait::async_trait;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use super::types::CaptureError;

/// A live camera stream bound to a video sink
pub trait VideoStream: Send + Sync {
    /// Current frame dimensions; `(0, 0)` while no frame has been decoded
    fn dimensions(&self) -> (u32, u32);

    /// The frame currently shown by the sink, if any
    fn current_frame(&self) -> Option<RgbaImage>;
}

/// Access to the default camera device
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CameraDevice: Send + Sync {
    /// Request access to the camera and open a stream
    ///
    /// Resolves once access is granted (or denied). Callers must not block on
    /// this; see [`super::MediaCapture::initialize`].
    async fn open(&self) -> Result<Box<dyn VideoStream>, CaptureError>;

    /// Device name for logging
    fn name(&self) -> String;
}

/// A stream that always shows the same frame
pub struct StaticStream {
    frame: RgbaImage,
}

impl StaticStream {
    pub fn new(frame: RgbaImage) -> Self {
        Self { frame }
    }
}

impl VideoStream for StaticStream {
    fn dimensions(&self) -> (u32, u32) {
        self.frame.dimensions()
    }

    fn current_frame(&self) -> Option<RgbaImage> {
        if self.frame.width() == 0 || self.frame.height() == 0 {
            return None;
        }
        Some(self.frame.clone())
    }
}

enum FrameOrigin {
    File(PathBuf),
    Memory(RgbaImage),
}

/// Camera backed by a still image, served as a constant live frame
///
/// Used where no physical webcam is reachable from the process (headless
/// hosts, CI), and to simulate grant latency via [`StillFrameCamera::with_grant_delay`].
pub struct StillFrameCamera {
    origin: FrameOrigin,
    grant_delay: Duration,
    name: String,
}

impl StillFrameCamera {
    /// Serve the image stored at `path` (any format the `image` crate decodes)
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = format!("still:{}", path.display());
        Self {
            origin: FrameOrigin::File(path),
            grant_delay: Duration::ZERO,
            name,
        }
    }

    /// Serve an in-memory frame
    pub fn from_frame(frame: RgbaImage) -> Self {
        Self {
            origin: FrameOrigin::Memory(frame),
            grant_delay: Duration::ZERO,
            name: "still:memory".to_string(),
        }
    }

    /// Delay the access grant, as a user permission prompt would
    pub fn with_grant_delay(mut self, delay: Duration) -> Self {
        self.grant_delay = delay;
        self
    }
}

#[async_trait]
impl CameraDevice for StillFrameCamera {
    async fn open(&self) -> Result<Box<dyn VideoStream>, CaptureError> {
        if !self.grant_delay.is_zero() {
            debug!("Waiting {:?} for camera grant", self.grant_delay);
            tokio::time::sleep(self.grant_delay).await;
        }

        let frame = match &self.origin {
            FrameOrigin::Memory(frame) => frame.clone(),
            FrameOrigin::File(path) => {
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|e| CaptureError::StreamFailed(format!("{}: {}", path.display(), e)))?;
                image::load_from_memory(&bytes)
                    .map_err(|e| CaptureError::StreamFailed(e.to_string()))?
                    .to_rgba8()
            }
        };

        info!(
            "Camera stream opened: device={}, size={}x{}",
            self.name,
            frame.width(),
            frame.height()
        );
        Ok(Box::new(StaticStream::new(frame)))
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

/// Stand-in for a host without any camera capability
pub struct UnavailableCamera;

#[async_trait]
impl CameraDevice for UnavailableCamera {
    async fn open(&self) -> Result<Box<dyn VideoStream>, CaptureError> {
        Err(CaptureError::NoDevice)
    }

    fn name(&self) -> String {
        "unavailable".to_string()
    }
}
