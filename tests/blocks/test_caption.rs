// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Captioning block: request shape, success and failure strings

use axum::http::StatusCode;
use imagerec_blocks::capture::UnavailableCamera;
use std::sync::Arc;
use std::time::Duration;

use super::mock_service::*;

#[tokio::test]
async fn test_recognize_returns_first_caption() {
    let service = spawn_mock(StatusCode::OK, CAPTION_BODY).await;
    let blocks = blocks_for(&service, Arc::new(UnavailableCamera), 5000);

    let value = blocks.recognize_image_by_url("http://x/img.png").await;
    assert_eq!(value, "a cat");
}

#[tokio::test]
async fn test_recognize_request_shape() {
    let service = spawn_mock(StatusCode::OK, CAPTION_BODY).await;
    let blocks = blocks_for(&service, Arc::new(UnavailableCamera), 5000);

    blocks.recognize_image_by_url("http://x/img.png").await;

    let requests = service.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, axum::http::Method::POST);
    assert_eq!(request.path, CAPTION_PATH);
    assert_eq!(
        request.query.as_deref(),
        Some("visualFeatures=Description&details=&language=en")
    );
    assert_eq!(
        request.header("ocp-apim-subscription-key").as_deref(),
        Some(SUBSCRIPTION_KEY)
    );
    assert_eq!(
        request.header("content-type").as_deref(),
        Some("application/json")
    );
    assert_eq!(request.json(), serde_json::json!({"url": "http://x/img.png"}));
}

#[tokio::test]
async fn test_recognize_empty_url_makes_no_request() {
    let service = spawn_mock(StatusCode::OK, CAPTION_BODY).await;
    let blocks = blocks_for(&service, Arc::new(UnavailableCamera), 5000);

    assert_eq!(blocks.recognize_image_by_url("").await, "Please enter a URL!");
    assert_eq!(service.request_count(), 0);
}

#[tokio::test]
async fn test_recognize_non_200_ignores_body() {
    for status in [
        StatusCode::BAD_REQUEST,
        StatusCode::UNAUTHORIZED,
        StatusCode::ACCEPTED,
        StatusCode::INTERNAL_SERVER_ERROR,
    ] {
        // Body is a valid caption, but the status alone decides
        let service = spawn_mock(status, CAPTION_BODY).await;
        let blocks = blocks_for(&service, Arc::new(UnavailableCamera), 5000);
        assert_eq!(
            blocks.recognize_image_by_url("http://x/img.png").await,
            "Invalid URL!",
            "status {} should fail",
            status
        );
    }
}

#[tokio::test]
async fn test_recognize_malformed_body() {
    let service = spawn_mock(StatusCode::OK, "{not json").await;
    let blocks = blocks_for(&service, Arc::new(UnavailableCamera), 5000);
    assert_eq!(
        blocks.recognize_image_by_url("http://x/img.png").await,
        "Invalid URL!"
    );
}

#[tokio::test]
async fn test_recognize_no_captions() {
    let service = spawn_mock(StatusCode::OK, r#"{"description":{"captions":[]}}"#).await;
    let blocks = blocks_for(&service, Arc::new(UnavailableCamera), 5000);
    assert_eq!(
        blocks.recognize_image_by_url("http://x/img.png").await,
        "Invalid URL!"
    );
}

#[tokio::test]
async fn test_recognize_timeout_uses_failure_string() {
    let service =
        spawn_mock_with_delay(StatusCode::OK, CAPTION_BODY, Duration::from_millis(500)).await;
    let blocks = blocks_for(&service, Arc::new(UnavailableCamera), 100);
    assert_eq!(
        blocks.recognize_image_by_url("http://x/img.png").await,
        "Invalid URL!"
    );
}
