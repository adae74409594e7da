// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Block descriptors for hosts that register the extension's blocks

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::opcode::{Opcode, ARG_IMAGE_URL, ARG_PRED_KEY, ARG_PRED_URL};

pub const EXTENSION_ID: &str = "imageRecExt";
pub const EXTENSION_NAME: &str = "Image Recognition";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Reporter,
    Command,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentInfo {
    #[serde(rename = "type")]
    pub argument_type: String,
    pub default_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInfo {
    pub opcode: String,
    pub block_type: BlockType,
    pub text: String,
    pub arguments: BTreeMap<String, ArgumentInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionInfo {
    pub id: String,
    pub name: String,
    pub show_status_button: bool,
    pub blocks: Vec<BlockInfo>,
}

fn block_text(opcode: Opcode) -> &'static str {
    match opcode {
        Opcode::RecognizeImageByUrl => "Recognise image (URL): [IMAGE_URL]",
        Opcode::PredictFromModel => "Predict from model (URL): [IMAGE_URL]",
        Opcode::PredictFromModelWebcam => "Predict from webcam",
        Opcode::PredictFromModelAndProbability => {
            "Predict from model & Get probability (URL): [IMAGE_URL]"
        }
        Opcode::SetPredictionKey => "Set prediction key: [PRED_KEY]",
        Opcode::SetPredictionUrl => "Set prediction URL: [PRED_URL]",
    }
}

fn block_arguments(opcode: Opcode) -> &'static [&'static str] {
    match opcode {
        Opcode::RecognizeImageByUrl
        | Opcode::PredictFromModel
        | Opcode::PredictFromModelAndProbability => &[ARG_IMAGE_URL],
        Opcode::PredictFromModelWebcam => &[],
        Opcode::SetPredictionKey => &[ARG_PRED_KEY],
        Opcode::SetPredictionUrl => &[ARG_PRED_URL],
    }
}

/// Descriptors for all blocks, in display order
pub fn extension_info() -> ExtensionInfo {
    let blocks = Opcode::ALL
        .iter()
        .map(|&opcode| BlockInfo {
            opcode: opcode.as_str().to_string(),
            block_type: if opcode.is_command() {
                BlockType::Command
            } else {
                BlockType::Reporter
            },
            text: block_text(opcode).to_string(),
            arguments: block_arguments(opcode)
                .iter()
                .map(|name| {
                    (
                        name.to_string(),
                        ArgumentInfo {
                            argument_type: "string".to_string(),
                            default_value: String::new(),
                        },
                    )
                })
                .collect(),
        })
        .collect();

    ExtensionInfo {
        id: EXTENSION_ID.to_string(),
        name: EXTENSION_NAME.to_string(),
        show_status_button: true,
        blocks,
    }
}
