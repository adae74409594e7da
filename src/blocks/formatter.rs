// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Display strings returned to the host
//!
//! Every operation ends in exactly one of: a validation message, a formatted
//! success value, or a fixed failure string.

use tracing::warn;

use crate::config::ConfigError;
use crate::vision::{InferenceError, PredictionResult};

pub const MSG_ENTER_URL: &str = "Please enter a URL!";
pub const MSG_ENTER_PREDICTION_KEY: &str = "Please enter valid prediction key!";
pub const MSG_ENTER_PREDICTION_URL: &str = "Please enter valid prediction URL!";
pub const MSG_NO_IMAGE_CAPTURED: &str = "No image was capture!";
pub const MSG_INVALID_URL: &str = "Invalid URL!";
pub const MSG_INVALID_FILE: &str = "Invalid File!";

/// Which kind of input a failed request was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Url,
    Webcam,
}

impl ImageSource {
    fn failure_message(self) -> &'static str {
        match self {
            ImageSource::Url => MSG_INVALID_URL,
            ImageSource::Webcam => MSG_INVALID_FILE,
        }
    }
}

/// Collapse an inference error into its display string
///
/// Details are logged only; the returned value never depends on them.
pub fn inference_failure(error: &InferenceError, source: ImageSource) -> String {
    match error {
        InferenceError::EmptyUrl => MSG_ENTER_URL.to_string(),
        other => {
            warn!("Inference request failed ({:?} source): {}", source, other);
            source.failure_message().to_string()
        }
    }
}

pub fn config_rejection(error: &ConfigError) -> String {
    match error {
        ConfigError::EmptyPredictionKey => MSG_ENTER_PREDICTION_KEY.to_string(),
        ConfigError::EmptyPredictionUrl => MSG_ENTER_PREDICTION_URL.to_string(),
    }
}

pub fn label(prediction: &PredictionResult) -> String {
    prediction.label.clone()
}

/// `"Item: <label>, Probability: <probability>"`
pub fn label_and_probability(prediction: &PredictionResult) -> String {
    format!(
        "Item: {}, Probability: {}",
        prediction.label, prediction.probability
    )
}
