// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for remote image inference

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Caption returned by the captioning service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionResult {
    /// Natural-language description of the image
    pub text: String,
    /// Service confidence for the caption, if reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Top prediction returned by the classifier service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted tag name
    pub label: String,
    /// Confidence in [0, 1]
    pub probability: f64,
}

/// Errors that can occur during an inference request
#[derive(Debug, Error)]
pub enum InferenceError {
    /// No image URL was supplied
    #[error("Image URL is empty")]
    EmptyUrl,

    /// The service answered with a status other than 200
    #[error("Inference API error: {status} - {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body (truncated)
        body: String,
    },

    /// The request never produced a response
    #[error("Inference transport error: {0}")]
    Transport(String),

    /// The request exceeded the configured timeout
    #[error("Inference timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// The response body was not the expected JSON shape
    #[error("Failed to parse inference response: {0}")]
    Parse(String),

    /// The response parsed but carried no caption or prediction
    #[error("Inference response contained no {0}")]
    EmptyResponse(&'static str),
}

impl InferenceError {
    pub(crate) fn from_reqwest(e: reqwest::Error, timeout_ms: u64) -> Self {
        if e.is_timeout() {
            InferenceError::Timeout { timeout_ms }
        } else {
            InferenceError::Transport(e.to_string())
        }
    }
}

/// Keep logged response bodies short
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 512;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
