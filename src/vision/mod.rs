// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Remote image inference module
//!
//! This module provides:
//! - Image captioning by URL via the captioning service
//! - Label prediction by URL or raw image bytes via the user's classifier
//!
//! Every request is awaited to completion by its caller; nothing is spawned.

pub mod caption_client;
pub mod classifier_client;
pub mod types;

pub use caption_client::CaptionClient;
pub use classifier_client::ClassifierClient;
pub use types::{CaptionResult, InferenceError, PredictionResult};
