// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! The image recognition blocks
//!
//! Each operation awaits its single network request (if any) to completion
//! before returning, and every failure is absorbed into a display string.

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::formatter::{self, ImageSource, MSG_NO_IMAGE_CAPTURED};
use super::opcode::{BlockArgs, Opcode, ARG_IMAGE_URL, ARG_PRED_KEY, ARG_PRED_URL};
use crate::capture::{CameraDevice, MediaCapture, StillFrameCamera, UnavailableCamera};
use crate::config::{EndpointConfig, ServiceConfig};
use crate::vision::{CaptionClient, ClassifierClient, PredictionResult};

/// Extension instance: owns the classifier endpoint, the camera and both clients
pub struct ImageRecBlocks {
    endpoint: RwLock<EndpointConfig>,
    capture: MediaCapture,
    captioner: CaptionClient,
    classifier: ClassifierClient,
}

impl ImageRecBlocks {
    pub fn new(captioner: CaptionClient, classifier: ClassifierClient, capture: MediaCapture) -> Self {
        Self {
            endpoint: RwLock::new(EndpointConfig::new()),
            capture,
            captioner,
            classifier,
        }
    }

    /// Build clients and camera from process configuration
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let camera: Arc<dyn CameraDevice> = match &config.camera_frame_path {
            Some(path) => Arc::new(StillFrameCamera::from_path(path)),
            None => {
                info!("No camera frame source configured; webcam capture unavailable");
                Arc::new(UnavailableCamera)
            }
        };

        Ok(Self::new(
            CaptionClient::from_config(config)?,
            ClassifierClient::new(config.request_timeout_ms)?,
            MediaCapture::new(camera),
        ))
    }

    /// Current classifier endpoint settings
    pub async fn endpoint_config(&self) -> EndpointConfig {
        self.endpoint.read().await.clone()
    }

    pub fn media_capture(&self) -> &MediaCapture {
        &self.capture
    }

    /// Invoke an operation by name with its argument record
    ///
    /// Commands yield `None` on success; every other outcome is a display string.
    pub async fn invoke(&self, opcode: Opcode, args: &BlockArgs) -> Option<String> {
        debug!("Invoking block {}", opcode);
        match opcode {
            Opcode::RecognizeImageByUrl => {
                Some(self.recognize_image_by_url(&args.text(ARG_IMAGE_URL)).await)
            }
            Opcode::PredictFromModel => {
                Some(self.predict_from_model(&args.text(ARG_IMAGE_URL)).await)
            }
            Opcode::PredictFromModelWebcam => Some(self.predict_from_model_webcam().await),
            Opcode::PredictFromModelAndProbability => Some(
                self.predict_from_model_and_probability(&args.text(ARG_IMAGE_URL))
                    .await,
            ),
            Opcode::SetPredictionKey => self.set_prediction_key(&args.text(ARG_PRED_KEY)).await,
            Opcode::SetPredictionUrl => self.set_prediction_url(&args.text(ARG_PRED_URL)).await,
        }
    }

    /// Caption the image at `image_url`
    pub async fn recognize_image_by_url(&self, image_url: &str) -> String {
        match self.captioner.describe(image_url).await {
            Ok(caption) => caption.text,
            Err(e) => formatter::inference_failure(&e, ImageSource::Url),
        }
    }

    /// Predicted label for the image at `image_url`
    pub async fn predict_from_model(&self, image_url: &str) -> String {
        match self.predict_url(image_url).await {
            Ok(prediction) => formatter::label(&prediction),
            Err(message) => message,
        }
    }

    /// Predicted label and its probability for the image at `image_url`
    pub async fn predict_from_model_and_probability(&self, image_url: &str) -> String {
        match self.predict_url(image_url).await {
            Ok(prediction) => formatter::label_and_probability(&prediction),
            Err(message) => message,
        }
    }

    /// Predicted label for the current webcam frame
    ///
    /// Uses whatever frame is live right now; if the camera has not been
    /// granted yet no request is sent.
    pub async fn predict_from_model_webcam(&self) -> String {
        let image = match self.capture.snapshot() {
            Ok(Some(image)) => image,
            Ok(None) => return MSG_NO_IMAGE_CAPTURED.to_string(),
            Err(e) => {
                warn!("Webcam capture failed: {}", e);
                return MSG_NO_IMAGE_CAPTURED.to_string();
            }
        };

        let endpoint = self.endpoint_config().await;
        match self.classifier.predict_image(&endpoint, &image).await {
            Ok(prediction) => formatter::label(&prediction),
            Err(e) => formatter::inference_failure(&e, ImageSource::Webcam),
        }
    }

    /// Store the classifier prediction key and start the camera
    pub async fn set_prediction_key(&self, key: &str) -> Option<String> {
        let result = self.endpoint.write().await.set_prediction_key(key);
        match result {
            Ok(()) => {
                info!("Prediction key updated");
                self.capture.initialize();
                None
            }
            Err(e) => Some(formatter::config_rejection(&e)),
        }
    }

    /// Store the classifier prediction URL
    pub async fn set_prediction_url(&self, url: &str) -> Option<String> {
        match self.endpoint.write().await.set_prediction_url(url) {
            Ok(()) => {
                info!("Prediction URL updated: {}", url);
                None
            }
            Err(e) => Some(formatter::config_rejection(&e)),
        }
    }

    async fn predict_url(&self, image_url: &str) -> std::result::Result<PredictionResult, String> {
        let endpoint = self.endpoint_config().await;
        self.classifier
            .predict_url(&endpoint, image_url)
            .await
            .map_err(|e| formatter::inference_failure(&e, ImageSource::Url))
    }
}
