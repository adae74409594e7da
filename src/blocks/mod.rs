// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image recognition blocks
//!
//! Host-facing operations, invoked by name with an argument record:
//! - `recognizeImageByURL(IMAGE_URL)`
//! - `predictFromModel(IMAGE_URL)`
//! - `predictFromModelWebcam()`
//! - `predictFromModelAndProbability(IMAGE_URL)`
//! - `setPredictionKey(PRED_KEY)`
//! - `setPredictionURL(PRED_URL)`

pub mod extension;
pub mod formatter;
pub mod info;
pub mod opcode;

pub use extension::ImageRecBlocks;
pub use info::{extension_info, BlockInfo, BlockType, ExtensionInfo};
pub use opcode::{BlockArgs, Opcode, UnknownOpcode};
