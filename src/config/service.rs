// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Process configuration loaded from the environment

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default Computer Vision analyze endpoint
pub const DEFAULT_CAPTION_ENDPOINT: &str =
    "https://southeastasia.api.cognitive.microsoft.com/vision/v2.0/analyze";

/// Configuration for the inference services and the host bridge
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Captioning service analyze endpoint
    pub caption_endpoint: String,
    /// Static subscription credential for the captioning service
    pub caption_subscription_key: String,
    /// Caption language
    pub caption_language: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Still image served as the webcam frame; no camera when unset
    pub camera_frame_path: Option<PathBuf>,
    /// Host bridge bind host
    pub api_host: String,
    /// Host bridge bind port
    pub api_port: u16,
}

impl ServiceConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            caption_endpoint: env::var("CAPTION_ENDPOINT").unwrap_or(defaults.caption_endpoint),
            caption_subscription_key: env::var("CAPTION_SUBSCRIPTION_KEY").unwrap_or_default(),
            caption_language: env::var("CAPTION_LANGUAGE").unwrap_or(defaults.caption_language),
            request_timeout_ms: env::var("INFERENCE_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_ms),
            camera_frame_path: env::var("CAMERA_FRAME_PATH")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            api_host: env::var("API_HOST").unwrap_or(defaults.api_host),
            api_port: env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.api_port),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.request_timeout_ms == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }
        if let Err(e) = url::Url::parse(&self.caption_endpoint) {
            return Err(format!(
                "Invalid caption endpoint '{}': {}",
                self.caption_endpoint, e
            ));
        }
        if self.api_port == 0 {
            return Err("API port must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Socket address for the host bridge
    pub fn api_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.api_host, self.api_port)
            .parse()
            .map_err(|e| format!("Invalid API address: {}", e))
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            caption_endpoint: DEFAULT_CAPTION_ENDPOINT.to_string(),
            caption_subscription_key: String::new(),
            caption_language: "en".to_string(),
            request_timeout_ms: 30000,
            camera_frame_path: None,
            api_host: "127.0.0.1".to_string(),
            api_port: 8080,
        }
    }
}
