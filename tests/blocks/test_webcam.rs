// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Webcam classifier block: capture gating and binary upload

use axum::http::StatusCode;
use image::{Rgba, RgbaImage};
use imagerec_blocks::capture::{detect_format, StillFrameCamera, UnavailableCamera};
use imagerec_blocks::ImageRecBlocks;
use std::sync::Arc;
use std::time::Duration;

use super::mock_service::*;

fn test_frame() -> RgbaImage {
    RgbaImage::from_fn(16, 9, |x, y| Rgba([(x * 10) as u8, (y * 20) as u8, 128, 255]))
}

async fn configure(blocks: &ImageRecBlocks, service: &MockService) {
    blocks.set_prediction_url(&service.url(PREDICT_PATH)).await;
    blocks.set_prediction_key("pk-webcam").await;
}

#[tokio::test]
async fn test_webcam_without_initialization() {
    let service = spawn_mock(StatusCode::OK, PREDICTION_BODY).await;
    let blocks = blocks_for(&service, Arc::new(StillFrameCamera::from_frame(test_frame())), 5000);

    assert_eq!(blocks.predict_from_model_webcam().await, "No image was capture!");
    assert_eq!(service.request_count(), 0);
}

#[tokio::test]
async fn test_webcam_prediction() {
    let service = spawn_mock(StatusCode::OK, PREDICTION_BODY).await;
    let blocks = blocks_for(&service, Arc::new(StillFrameCamera::from_frame(test_frame())), 5000);
    configure(&blocks, &service).await;
    wait_for_camera(&blocks).await;

    assert_eq!(blocks.predict_from_model_webcam().await, "cat");
}

#[tokio::test]
async fn test_webcam_uploads_png_bytes() {
    let service = spawn_mock(StatusCode::OK, PREDICTION_BODY).await;
    let blocks = blocks_for(&service, Arc::new(StillFrameCamera::from_frame(test_frame())), 5000);
    configure(&blocks, &service).await;
    wait_for_camera(&blocks).await;

    blocks.predict_from_model_webcam().await;

    let requests = service.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.path, PREDICT_PATH);
    assert_eq!(request.header("prediction-key").as_deref(), Some("pk-webcam"));
    assert_eq!(
        request.header("content-type").as_deref(),
        Some("application/octet-stream")
    );
    assert_eq!(detect_format(&request.body), Some(image::ImageFormat::Png));

    let uploaded = image::load_from_memory(&request.body).unwrap().to_rgba8();
    assert_eq!(uploaded, test_frame());
}

#[tokio::test]
async fn test_webcam_non_200() {
    let service = spawn_mock(StatusCode::BAD_REQUEST, r#"{"code":"BadRequestImageFormat"}"#).await;
    let blocks = blocks_for(&service, Arc::new(StillFrameCamera::from_frame(test_frame())), 5000);
    configure(&blocks, &service).await;
    wait_for_camera(&blocks).await;

    assert_eq!(blocks.predict_from_model_webcam().await, "Invalid File!");
}

#[tokio::test]
async fn test_webcam_before_grant_completes() {
    let service = spawn_mock(StatusCode::OK, PREDICTION_BODY).await;
    let camera =
        StillFrameCamera::from_frame(test_frame()).with_grant_delay(Duration::from_millis(300));
    let blocks = blocks_for(&service, Arc::new(camera), 5000);
    configure(&blocks, &service).await;

    // No wait for readiness: the capture is empty
    assert_eq!(blocks.predict_from_model_webcam().await, "No image was capture!");
    assert_eq!(service.request_count(), 0);

    wait_for_camera(&blocks).await;
    assert_eq!(blocks.predict_from_model_webcam().await, "cat");
}

#[tokio::test]
async fn test_webcam_zero_dimension_frame() {
    let service = spawn_mock(StatusCode::OK, PREDICTION_BODY).await;
    let blocks = blocks_for(
        &service,
        Arc::new(StillFrameCamera::from_frame(RgbaImage::new(0, 0))),
        5000,
    );
    configure(&blocks, &service).await;
    wait_for_camera(&blocks).await;

    assert_eq!(blocks.predict_from_model_webcam().await, "No image was capture!");
    assert_eq!(service.request_count(), 0);
}

#[tokio::test]
async fn test_webcam_camera_unavailable() {
    let service = spawn_mock(StatusCode::OK, PREDICTION_BODY).await;
    let blocks = blocks_for(&service, Arc::new(UnavailableCamera), 5000);
    configure(&blocks, &service).await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(blocks.predict_from_model_webcam().await, "No image was capture!");
    assert!(blocks
        .media_capture()
        .last_error()
        .unwrap()
        .contains("There was an error with accessing the camera stream"));
    assert_eq!(service.request_count(), 0);
}

#[tokio::test]
async fn test_webcam_frame_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");
    test_frame().save(&path).unwrap();

    let service = spawn_mock(StatusCode::OK, PREDICTION_BODY).await;
    let blocks = blocks_for(&service, Arc::new(StillFrameCamera::from_path(&path)), 5000);
    configure(&blocks, &service).await;
    wait_for_camera(&blocks).await;

    assert_eq!(blocks.predict_from_model_webcam().await, "cat");
}
