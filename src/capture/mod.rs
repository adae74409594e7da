// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Webcam capture module
//!
//! Provides:
//! - Camera acquisition in the background via a [`CameraDevice`]
//! - Single-frame snapshots encoded as PNG [`ImageBlob`]s
//!
//! A snapshot never waits for the camera. Until the device grants access the
//! capture is simply empty.

pub mod camera;
pub mod image_utils;
pub mod session;
pub mod types;

pub use camera::{CameraDevice, StaticStream, StillFrameCamera, UnavailableCamera, VideoStream};
pub use image_utils::{data_uri_to_blob, detect_format, encode_png, frame_to_data_uri};
pub use session::{CaptureSession, MediaCapture};
pub use types::{CaptureError, ImageBlob, PNG_MIME_TYPE};
