// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for webcam capture

use thiserror::Error;

/// MIME type of every captured frame
pub const PNG_MIME_TYPE: &str = "image/png";

/// A binary image payload paired with its MIME type
///
/// Produced once per capture and consumed by a single classifier request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlob {
    /// Encoded image bytes
    pub bytes: Vec<u8>,
    /// MIME type of `bytes` (e.g. "image/png")
    pub mime_type: String,
}

impl ImageBlob {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Errors that can occur while acquiring or encoding camera frames
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The host offers no camera capability at all
    #[error("No camera device available")]
    NoDevice,

    /// The user or platform refused camera access
    #[error("Camera access denied: {0}")]
    PermissionDenied(String),

    /// The camera stream could not be opened
    #[error("Failed to open camera stream: {0}")]
    StreamFailed(String),

    /// The frame could not be rasterised or encoded
    #[error("Failed to encode frame: {0}")]
    EncodeFailed(String),

    /// The data URI is not of the form `data:<mime>;base64,<payload>`
    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    #[error("Invalid base64 encoding: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

impl CaptureError {
    /// Short error name, as reported in the camera error message
    pub fn name(&self) -> &'static str {
        match self {
            CaptureError::NoDevice => "NotFoundError",
            CaptureError::PermissionDenied(_) => "NotAllowedError",
            CaptureError::StreamFailed(_) => "NotReadableError",
            CaptureError::EncodeFailed(_) => "EncodingError",
            CaptureError::InvalidDataUri(_) | CaptureError::InvalidBase64(_) => "DataError",
        }
    }
}
