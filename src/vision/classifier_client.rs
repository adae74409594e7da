// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Custom classifier client (Custom Vision prediction API)
//!
//! The endpoint and credential come from the caller's [`EndpointConfig`] on
//! every request, so the client itself holds no user state.

use anyhow::Result;
use reqwest::{header::CONTENT_TYPE, Client, RequestBuilder, StatusCode};
use std::time::Duration;
use tracing::{debug, info};

use super::types::{truncate_body, InferenceError, PredictionResult};
use crate::capture::ImageBlob;
use crate::config::EndpointConfig;

// --- Custom Vision serde structs ---

#[derive(serde::Serialize)]
struct PredictUrlRequest<'a> {
    #[serde(rename = "Url")]
    url: &'a str,
}

#[derive(Debug, serde::Deserialize)]
struct PredictResponse {
    predictions: Vec<Prediction>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    tag_name: String,
    probability: f64,
}

/// Client for the user-trained classifier service
pub struct ClassifierClient {
    client: Client,
    timeout_ms: u64,
}

impl ClassifierClient {
    /// Create a new classifier client
    pub fn new(timeout_ms: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;

        info!("Classifier client configured: timeout={}ms", timeout_ms);
        Ok(Self { client, timeout_ms })
    }

    /// Classify the image at `image_url`
    pub async fn predict_url(
        &self,
        endpoint: &EndpointConfig,
        image_url: &str,
    ) -> Result<PredictionResult, InferenceError> {
        if image_url.is_empty() {
            return Err(InferenceError::EmptyUrl);
        }

        let request = self
            .request(endpoint)
            .json(&PredictUrlRequest { url: image_url });
        self.execute(request).await
    }

    /// Classify raw image bytes
    pub async fn predict_image(
        &self,
        endpoint: &EndpointConfig,
        image: &ImageBlob,
    ) -> Result<PredictionResult, InferenceError> {
        debug!(
            "Sending {} byte {} image to classifier",
            image.len(),
            image.mime_type
        );
        let request = self
            .request(endpoint)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image.bytes.clone());
        self.execute(request).await
    }

    /// Shared request setup: POST to the prediction URL with the prediction key
    ///
    /// An empty or malformed URL is not rejected here; it fails when sent.
    fn request(&self, endpoint: &EndpointConfig) -> RequestBuilder {
        self.client
            .post(endpoint.prediction_url())
            .header("Prediction-Key", endpoint.prediction_key())
    }

    async fn execute(&self, request: RequestBuilder) -> Result<PredictionResult, InferenceError> {
        let start = std::time::Instant::now();
        let response = request
            .send()
            .await
            .map_err(|e| InferenceError::from_reqwest(e, self.timeout_ms))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| InferenceError::from_reqwest(e, self.timeout_ms))?;

        if status != StatusCode::OK {
            return Err(InferenceError::Http {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let result = parse_prediction(&body)?;
        debug!(
            "Prediction received in {}ms: {} ({})",
            start.elapsed().as_millis(),
            result.label,
            result.probability
        );
        Ok(result)
    }
}

/// Extract the first prediction from a classifier response body
pub fn parse_prediction(body: &str) -> Result<PredictionResult, InferenceError> {
    let parsed: PredictResponse =
        serde_json::from_str(body).map_err(|e| InferenceError::Parse(e.to_string()))?;

    parsed
        .predictions
        .into_iter()
        .next()
        .map(|p| PredictionResult {
            label: p.tag_name,
            probability: p.probability,
        })
        .ok_or(InferenceError::EmptyResponse("predictions"))
}
