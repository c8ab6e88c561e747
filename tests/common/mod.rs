#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use github_relay::config::SecretString;
use github_relay::error::ApiError;
use github_relay::router::build_router;
use github_relay::services::{Notifier, RelayService};
use github_relay::utils::{
    format_signature_header, sign_payload, HmacSha256Verifier, SignatureVerifier,
};
use github_relay::AppState;

pub const SECRET: &str = "It's a Secret to Everybody";

/// Real HMAC verifier that also counts how often it was consulted
pub struct CountingVerifier {
    inner: HmacSha256Verifier,
    calls: AtomicUsize,
}

impl CountingVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            inner: HmacSha256Verifier::new(SecretString::new(secret)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SignatureVerifier for CountingVerifier {
    fn verify(&self, header: &str, payload: &[u8]) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.verify(header, payload)
    }
}

/// Notifier that records messages instead of sending them
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, message: &str) -> Result<(), ApiError> {
        self.messages.lock().unwrap().push(message.to_string());
        if self.fail {
            return Err(ApiError::Notifier("forced failure".to_string()));
        }
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub verifier: Arc<CountingVerifier>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_notifier(RecordingNotifier::default())
    }

    pub fn with_notifier(notifier: RecordingNotifier) -> Self {
        let verifier = Arc::new(CountingVerifier::new(SECRET));
        let notifier = Arc::new(notifier);

        let state = AppState {
            environment: "test".to_string(),
            relay: RelayService::new(verifier.clone(), notifier.clone()),
        };

        Self {
            router: build_router(state, Duration::from_secs(5)),
            verifier,
            notifier,
        }
    }

    /// Send a request through the router via `tower::ServiceExt::oneshot`.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("oneshot request failed");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("failed to read body")
            .to_bytes();

        (status, String::from_utf8(bytes.to_vec()).expect("body is not UTF-8"))
    }

    /// POST `body` to `path`, signed with the test secret.
    pub async fn post_signed(&self, path: &str, body: &[u8]) -> (StatusCode, String) {
        self.send(signed_request(path, body)).await
    }
}

pub fn signed_request(path: &str, body: &[u8]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .header("X-GitHub-Event", "pull_request")
        .header("X-GitHub-Delivery", "72d3162e-cc78-11e3-81ab-4c9367dc0958")
        .header(
            "X-Hub-Signature-256",
            format_signature_header(&sign_payload(SECRET, body)),
        )
        .body(Body::from(body.to_vec()))
        .expect("failed to build request")
}

pub fn to_body(value: &Value) -> Vec<u8> {
    serde_json::to_vec_pretty(value).expect("failed to serialize payload")
}

fn user(login: &str) -> Value {
    json!({"login": login, "html_url": format!("https://github.com/{login}")})
}

fn repository() -> Value {
    json!({
        "name": "relay",
        "full_name": "octo/relay",
        "html_url": "https://github.com/octo/relay"
    })
}

pub fn release_payload(prerelease: bool, assets: &[&str]) -> Value {
    let assets: Vec<Value> = assets
        .iter()
        .map(|name| {
            json!({
                "name": name,
                "browser_download_url": format!("https://github.com/octo/relay/releases/download/v2.0.0/{name}")
            })
        })
        .collect();

    json!({
        "action": "published",
        "repository": repository(),
        "sender": user("releaser"),
        "release": {
            "html_url": "https://github.com/octo/relay/releases/tag/v2.0.0",
            "tag_name": "v2.0.0",
            "prerelease": prerelease,
            "assets": assets
        }
    })
}

pub fn pull_request_payload(action: &str, commits: u64) -> Value {
    json!({
        "action": action,
        "number": 42,
        "repository": repository(),
        "sender": user("maintainer"),
        "pull_request": {
            "html_url": "https://github.com/octo/relay/pull/42",
            "title": "Handle empty releases",
            "user": user("contributor"),
            "number": 42,
            "commits": commits,
            "changed_files": 4,
            "additions": 120,
            "deletions": 7
        }
    })
}
