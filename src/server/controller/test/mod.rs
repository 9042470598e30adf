use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::server::{
    config::VoiceChannelPair, data::voice::fake::FakeVoicePlatform,
    middleware::auth::ADMIN_KEY_HEADER, router::router, service::voice::VoiceContext,
    state::AppState,
};


const SECRET: &str = "s3cret";
const GENERAL: &str = "10";
const OTHER: &str = "20";

fn two_channel_platform() -> FakeVoicePlatform {
    FakeVoicePlatform::new()
        .with_voice_channel(GENERAL, "General")
        .with_voice_channel(OTHER, "Other Team")
        .with_text_channel("30", "chat")
}

fn app(platform: &Arc<FakeVoicePlatform>) -> Router {
    let voice = VoiceContext::new(
        platform.clone(),
        VoiceChannelPair::new(GENERAL, OTHER),
        Duration::from_secs(5),
        Duration::from_secs(1),
    );

    router(
        AppState::new(voice, SECRET.to_string()),
        Path::new("client/dist"),
    )
}

/// Sends one request through the router and returns the status with the JSON body.
///
/// An empty body is returned as `Value::Null`.
async fn send(
    app: Router,
    method: Method,
    uri: &str,
    key: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(key) = key {
        request = request.header(ADMIN_KEY_HEADER, key);
    }
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}
