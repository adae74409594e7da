// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use axum::{
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::errors::ApiError;
use crate::blocks::{extension_info, BlockArgs, ImageRecBlocks, Opcode};
use crate::config::ServiceConfig;

#[derive(Clone)]
pub struct AppState {
    pub blocks: Arc<ImageRecBlocks>,
}

impl AppState {
    pub fn new(blocks: Arc<ImageRecBlocks>) -> Self {
        Self { blocks }
    }
}

/// Body of `POST /v1/blocks/:opcode`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvokeRequest {
    #[serde(default)]
    pub arguments: BlockArgs,
}

/// Display value produced by an operation; `null` for a successful command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvokeResponse {
    pub opcode: String,
    pub value: Option<String>,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Block descriptors
        .route("/v1/blocks", get(blocks_handler))
        // Operation invocation
        .route("/v1/blocks/:opcode", post(invoke_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(config: &ServiceConfig, blocks: Arc<ImageRecBlocks>) -> Result<()> {
    let addr = config.api_addr().map_err(anyhow::Error::msg)?;
    let app = create_app(AppState::new(blocks));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Block host bridge listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": crate::version::VERSION,
    }))
}

async fn blocks_handler() -> impl IntoResponse {
    Json(extension_info())
}

async fn invoke_handler(
    State(state): State<AppState>,
    Path(opcode): Path<String>,
    body: Bytes,
) -> Result<Json<InvokeResponse>, ApiError> {
    let opcode: Opcode = opcode
        .parse()
        .map_err(|e: crate::blocks::UnknownOpcode| ApiError::UnknownOpcode(e.0))?;

    let request: InvokeRequest = if body.is_empty() {
        InvokeRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::InvalidRequest(format!("Invalid request body: {}", e)))?
    };

    let value = state.blocks.invoke(opcode, &request.arguments).await;
    Ok(Json(InvokeResponse {
        opcode: opcode.as_str().to_string(),
        value,
    }))
}
