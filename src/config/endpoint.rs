// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Classifier endpoint configuration (prediction key and prediction URL)

use thiserror::Error;

/// Rejected configuration input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Prediction key must not be empty")]
    EmptyPredictionKey,

    #[error("Prediction URL must not be empty")]
    EmptyPredictionUrl,
}

/// Credential and endpoint of the user's custom classifier
///
/// Both fields start empty and are only changed through the setters. No
/// format validation happens beyond rejecting empty input; an unusable value
/// surfaces later as a failed classifier request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointConfig {
    prediction_key: String,
    prediction_url: String,
}

impl EndpointConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prediction_key(&self) -> &str {
        &self.prediction_key
    }

    pub fn prediction_url(&self) -> &str {
        &self.prediction_url
    }

    pub fn set_prediction_key(&mut self, key: &str) -> Result<(), ConfigError> {
        if key.is_empty() {
            return Err(ConfigError::EmptyPredictionKey);
        }
        self.prediction_key = key.to_string();
        Ok(())
    }

    pub fn set_prediction_url(&mut self, url: &str) -> Result<(), ConfigError> {
        if url.is_empty() {
            return Err(ConfigError::EmptyPredictionUrl);
        }
        self.prediction_url = url.to_string();
        Ok(())
    }

    /// Whether both values have been supplied
    pub fn is_complete(&self) -> bool {
        !self.prediction_key.is_empty() && !self.prediction_url.is_empty()
    }
}
