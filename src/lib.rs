// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod blocks;
pub mod capture;
pub mod cli;
pub mod config;
pub mod version;
pub mod vision;

// Re-export main types
pub use blocks::{BlockArgs, ImageRecBlocks, Opcode};
pub use capture::{CameraDevice, ImageBlob, MediaCapture};
pub use config::{EndpointConfig, ServiceConfig};
pub use vision::{CaptionClient, ClassifierClient, InferenceError, PredictionResult};
