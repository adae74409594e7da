// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration: classifier endpoint state and process settings

pub mod endpoint;
pub mod service;

pub use endpoint::{ConfigError, EndpointConfig};
pub use service::{ServiceConfig, DEFAULT_CAPTION_ENDPOINT};
