// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP host bridge
//!
//! Lets a host invoke block operations by name:
//! - `GET /health`
//! - `GET /v1/blocks` for block descriptors
//! - `POST /v1/blocks/:opcode` with `{"arguments": {...}}`

pub mod errors;
pub mod http_server;

pub use errors::{ApiError, ErrorResponse};
pub use http_server::{create_app, start_server, AppState, InvokeRequest, InvokeResponse};
