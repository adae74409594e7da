// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Frame encoding helpers: PNG rasterisation and data URI conversion

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;

use super::types::{CaptureError, ImageBlob, PNG_MIME_TYPE};

/// Encode an RGBA frame as PNG bytes
pub fn encode_png(frame: &RgbaImage) -> Result<Vec<u8>, CaptureError> {
    if frame.width() == 0 || frame.height() == 0 {
        return Err(CaptureError::EncodeFailed(
            "frame has zero dimensions".to_string(),
        ));
    }

    let mut buffer = Cursor::new(Vec::new());
    frame
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| CaptureError::EncodeFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Serialize an RGBA frame as a `data:image/png;base64,...` URI
pub fn frame_to_data_uri(frame: &RgbaImage) -> Result<String, CaptureError> {
    let png = encode_png(frame)?;
    Ok(format!("data:{};base64,{}", PNG_MIME_TYPE, STANDARD.encode(png)))
}

/// Decode a base64 data URI into a binary blob
///
/// Only base64 payloads are handled; percent-encoded data URIs are rejected.
///
/// # Example
/// ```ignore
/// let blob = data_uri_to_blob("data:image/png;base64,iVBORw0KGgo...")?;
/// assert_eq!(blob.mime_type, "image/png");
/// ```
pub fn data_uri_to_blob(data_uri: &str) -> Result<ImageBlob, CaptureError> {
    let (header, payload) = data_uri
        .split_once(',')
        .ok_or_else(|| CaptureError::InvalidDataUri("missing ',' separator".to_string()))?;

    let meta = header
        .strip_prefix("data:")
        .ok_or_else(|| CaptureError::InvalidDataUri("missing 'data:' scheme".to_string()))?;

    let mut parts = meta.split(';');
    let mime_type = parts.next().unwrap_or_default();
    if !parts.any(|p| p == "base64") {
        return Err(CaptureError::InvalidDataUri(
            "only base64 payloads are supported".to_string(),
        ));
    }

    let bytes = STANDARD.decode(payload)?;
    Ok(ImageBlob::new(bytes, mime_type))
}

/// Detect image format from magic bytes
pub fn detect_format(bytes: &[u8]) -> Option<ImageFormat> {
    match bytes {
        // PNG: 89 50 4E 47 (0x89 P N G)
        [0x89, 0x50, 0x4E, 0x47, ..] => Some(ImageFormat::Png),

        // JPEG: FF D8 FF
        [0xFF, 0xD8, 0xFF, ..] => Some(ImageFormat::Jpeg),

        // WebP: RIFF .... WEBP
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => Some(ImageFormat::WebP),

        // GIF: GIF87a or GIF89a
        [0x47, 0x49, 0x46, 0x38, x, ..] if *x == 0x37 || *x == 0x39 => Some(ImageFormat::Gif),

        // BMP: BM
        [0x42, 0x4D, ..] => Some(ImageFormat::Bmp),

        _ => None,
    }
}
