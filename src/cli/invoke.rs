// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::blocks::{extension_info, BlockArgs, ImageRecBlocks, Opcode};
use crate::config::ServiceConfig;

#[derive(Args, Debug)]
pub struct InvokeArgs {
    /// Operation name, e.g. predictFromModel
    pub opcode: String,

    /// Block argument as KEY=VALUE (repeatable), e.g. IMAGE_URL=https://...
    #[arg(long = "arg", value_parser = parse_key_value)]
    pub args: Vec<(String, String)>,

    /// Classifier prediction key, applied via setPredictionKey first
    #[arg(long, env = "PREDICTION_KEY")]
    pub prediction_key: Option<String>,

    /// Classifier prediction URL, applied via setPredictionURL first
    #[arg(long, env = "PREDICTION_URL")]
    pub prediction_url: Option<String>,

    /// Image file served as the webcam frame
    #[arg(long)]
    pub camera_frame: Option<PathBuf>,

    /// Time to give the camera before invoking the operation
    #[arg(long, default_value_t = 0)]
    pub camera_warmup_ms: u64,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))
}

pub async fn run_invoke(args: InvokeArgs) -> Result<()> {
    dotenv::dotenv().ok();

    let opcode: Opcode = args.opcode.parse().map_err(|e| anyhow!("{}", e))?;

    let mut config = ServiceConfig::from_env();
    if args.camera_frame.is_some() {
        config.camera_frame_path = args.camera_frame.clone();
    }
    config.validate().map_err(|e| anyhow!(e))?;

    let blocks = ImageRecBlocks::from_config(&config)?;

    if let Some(url) = &args.prediction_url {
        if let Some(message) = blocks.set_prediction_url(url).await {
            println!("{}", message);
        }
    }
    if let Some(key) = &args.prediction_key {
        if let Some(message) = blocks.set_prediction_key(key).await {
            println!("{}", message);
        }
    }

    if args.camera_warmup_ms > 0 {
        info!("Waiting {}ms for camera", args.camera_warmup_ms);
        tokio::time::sleep(Duration::from_millis(args.camera_warmup_ms)).await;
    }

    let mut block_args = BlockArgs::new();
    for (key, value) in &args.args {
        block_args.insert(key, value.as_str());
    }

    if let Some(value) = blocks.invoke(opcode, &block_args).await {
        println!("{}", value);
    }

    Ok(())
}

pub fn print_info() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&extension_info())?);
    Ok(())
}
