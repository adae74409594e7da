// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Operation names and argument records passed in by the host

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Argument carrying an image URL
pub const ARG_IMAGE_URL: &str = "IMAGE_URL";
/// Argument carrying the classifier prediction key
pub const ARG_PRED_KEY: &str = "PRED_KEY";
/// Argument carrying the classifier prediction URL
pub const ARG_PRED_URL: &str = "PRED_URL";

/// Block operations exposed to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    RecognizeImageByUrl,
    PredictFromModel,
    PredictFromModelWebcam,
    PredictFromModelAndProbability,
    SetPredictionKey,
    SetPredictionUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown opcode: {0}")]
pub struct UnknownOpcode(pub String);

impl Opcode {
    pub const ALL: [Opcode; 6] = [
        Opcode::RecognizeImageByUrl,
        Opcode::PredictFromModel,
        Opcode::PredictFromModelWebcam,
        Opcode::PredictFromModelAndProbability,
        Opcode::SetPredictionKey,
        Opcode::SetPredictionUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Opcode::RecognizeImageByUrl => "recognizeImageByURL",
            Opcode::PredictFromModel => "predictFromModel",
            Opcode::PredictFromModelWebcam => "predictFromModelWebcam",
            Opcode::PredictFromModelAndProbability => "predictFromModelAndProbability",
            Opcode::SetPredictionKey => "setPredictionKey",
            Opcode::SetPredictionUrl => "setPredictionURL",
        }
    }

    /// Commands return no value on success; reporters always return one
    pub fn is_command(&self) -> bool {
        matches!(self, Opcode::SetPredictionKey | Opcode::SetPredictionUrl)
    }
}

impl FromStr for Opcode {
    type Err = UnknownOpcode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recognizeImageByURL" | "recogImageByURL" => Ok(Opcode::RecognizeImageByUrl),
            "predictFromModel" => Ok(Opcode::PredictFromModel),
            "predictFromModelWebcam" => Ok(Opcode::PredictFromModelWebcam),
            "predictFromModelAndProbability" | "predictFromModelAndProb" => {
                Ok(Opcode::PredictFromModelAndProbability)
            }
            "setPredictionKey" => Ok(Opcode::SetPredictionKey),
            "setPredictionURL" => Ok(Opcode::SetPredictionUrl),
            other => Err(UnknownOpcode(other.to_string())),
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Argument record supplied with an operation invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockArgs(HashMap<String, serde_json::Value>);

impl BlockArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<serde_json::Value>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<serde_json::Value>) {
        self.0.insert(name.to_string(), value.into());
    }

    /// Argument as text; missing or null arguments read as ""
    pub fn text(&self, name: &str) -> String {
        match self.0.get(name) {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}
