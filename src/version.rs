// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the image recognition blocks

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-webcam-classifier-2025-10-19";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2025-10-19";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "image-captioning",
    "custom-classifier-url",
    "custom-classifier-webcam",
    "prediction-probability",
    "http-host-bridge",
];

/// Get formatted version string
pub fn get_version_string() -> String {
    format!("Image Recognition Blocks {} ({})", VERSION_NUMBER, BUILD_DATE)
}
