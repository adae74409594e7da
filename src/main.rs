// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use imagerec_blocks::{api::start_server, blocks::ImageRecBlocks, config::ServiceConfig};
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    tracing::info!("Starting {}", imagerec_blocks::version::get_version_string());

    let config = ServiceConfig::from_env();
    config.validate().map_err(|e| anyhow!(e))?;
    if config.caption_subscription_key.is_empty() {
        tracing::warn!("CAPTION_SUBSCRIPTION_KEY is not set");
    }

    let blocks = Arc::new(ImageRecBlocks::from_config(&config)?);

    tokio::select! {
        result = start_server(&config, blocks) => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutting down");
        }
    }

    Ok(())
}
