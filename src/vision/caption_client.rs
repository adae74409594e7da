// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Captioning service client (Computer Vision "analyze" API)

use anyhow::Result;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::types::{truncate_body, CaptionResult, InferenceError};
use crate::config::ServiceConfig;

// --- Computer Vision serde structs ---

#[derive(serde::Serialize)]
struct AnalyzeRequest<'a> {
    url: &'a str,
}

#[derive(Debug, serde::Deserialize)]
struct AnalyzeResponse {
    description: AnalyzeDescription,
}

#[derive(Debug, serde::Deserialize)]
struct AnalyzeDescription {
    captions: Vec<AnalyzeCaption>,
}

#[derive(Debug, serde::Deserialize)]
struct AnalyzeCaption {
    text: String,
    confidence: Option<f64>,
}

/// Client for the generic image captioning service
pub struct CaptionClient {
    client: Client,
    endpoint: String,
    subscription_key: String,
    language: String,
    timeout_ms: u64,
}

impl CaptionClient {
    /// Create a new captioning client
    pub fn new(
        endpoint: &str,
        subscription_key: &str,
        language: &str,
        timeout_ms: u64,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;

        info!(
            "Caption client configured: endpoint={}, language={}",
            endpoint, language
        );
        if subscription_key.is_empty() {
            warn!("Caption subscription key is empty; captioning requests will be rejected");
        }

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            subscription_key: subscription_key.to_string(),
            language: language.to_string(),
            timeout_ms,
        })
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        Self::new(
            &config.caption_endpoint,
            &config.caption_subscription_key,
            &config.caption_language,
            config.request_timeout_ms,
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Describe the image at `image_url`
    ///
    /// Waits until the service answers or the request fails; the caller must
    /// await completion before using the result.
    pub async fn describe(&self, image_url: &str) -> Result<CaptionResult, InferenceError> {
        if image_url.is_empty() {
            return Err(InferenceError::EmptyUrl);
        }

        let start = std::time::Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[
                ("visualFeatures", "Description"),
                ("details", ""),
                ("language", self.language.as_str()),
            ])
            .header("Ocp-Apim-Subscription-Key", &self.subscription_key)
            .json(&AnalyzeRequest { url: image_url })
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

        let result = parse_caption(&body)?;
        debug!(
            "Caption received in {}ms: {:?}",
            start.elapsed().as_millis(),
            result.text
        );
        Ok(result)
    }
}

/// Extract the first caption from an analyze response body
pub fn parse_caption(body: &str) -> Result<CaptionResult, InferenceError> {
    let parsed: AnalyzeResponse =
        serde_json::from_str(body).map_err(|e| InferenceError::Parse(e.to_string()))?;

    parsed
        .description
        .captions
        .into_iter()
        .next()
        .map(|caption| CaptionResult {
            text: caption.text,
            confidence: caption.confidence,
        })
        .ok_or(InferenceError::EmptyResponse("captions"))
}
