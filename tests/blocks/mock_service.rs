// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! In-process stand-ins for the captioning and classifier services

use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use imagerec_blocks::{
    capture::{CameraDevice, MediaCapture},
    CaptionClient, ClassifierClient, ImageRecBlocks,
};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

pub const SUBSCRIPTION_KEY: &str = "test-subscription-key";
pub const CAPTION_PATH: &str = "/vision/v2.0/analyze";
pub const PREDICT_PATH: &str = "/customvision/v3.0/Prediction/p1/classify/iterations/it1/url";

pub const CAPTION_BODY: &str = r#"{"description":{"captions":[{"text":"a cat"}]}}"#;
pub const PREDICTION_BODY: &str = r#"{"predictions":[{"tagName":"cat","probability":0.87}]}"#;

/// A request as seen by the mock service
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body should be JSON")
    }
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    delay: Duration,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Handle to a running mock service
#[derive(Clone)]
pub struct MockService {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

/// Start a service that answers every request with `status` and `body`
pub async fn spawn_mock(status: StatusCode, body: &str) -> MockService {
    spawn_mock_with_delay(status, body, Duration::ZERO).await
}

/// Like [`spawn_mock`], but waits `delay` before answering
pub async fn spawn_mock_with_delay(status: StatusCode, body: &str, delay: Duration) -> MockService {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status,
        body: body.to_string(),
        delay,
        requests: Arc::clone(&requests),
    };

    let app = Router::new().fallback(record_and_respond).with_state(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockService { addr, requests }
}

async fn record_and_respond(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(|q| q.to_string()),
        headers,
        body: body.to_vec(),
    });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    (state.status, [(CONTENT_TYPE, "application/json")], state.body).into_response()
}

/// Blocks whose captioning client points at `caption` and whose camera is `camera`
pub fn blocks_for(caption: &MockService, camera: Arc<dyn CameraDevice>, timeout_ms: u64) -> ImageRecBlocks {
    ImageRecBlocks::new(
        CaptionClient::new(&caption.url(CAPTION_PATH), SUBSCRIPTION_KEY, "en", timeout_ms).unwrap(),
        ClassifierClient::new(timeout_ms).unwrap(),
        MediaCapture::new(camera),
    )
}

/// Poll until the camera stream is live
pub async fn wait_for_camera(blocks: &ImageRecBlocks) {
    for _ in 0..200 {
        if blocks.media_capture().is_ready() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("camera never became ready");
}
