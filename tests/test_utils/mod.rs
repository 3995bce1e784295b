//! Test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, body::Body};
use tempfile::TempDir;

use fcm_relay::api::{AppState, app};
use fcm_relay::core::AppConfig;
use fcm_relay::fcm::{Message, ProviderError, PushProvider};

pub const INDEX_HTML: &str = "<!doctype html><title>FCM relay</title>";
pub const SERVICE_WORKER_JS: &str = "self.addEventListener('push', () => {});";

/// Push provider that records every message and answers with a fixed
/// result
pub struct FakeProvider {
    result: Result<String, String>,
    pub sent: Mutex<Vec<Message>>,
}

impl FakeProvider {
    pub fn succeeding(message_id: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(message_id.to_string()),
            sent: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(reason.to_string()),
            sent: Mutex::new(Vec::new()),
        })
    }

    pub fn sent_messages(&self) -> Vec<Message> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl PushProvider for FakeProvider {
    async fn send(&self, message: &Message) -> Result<String, ProviderError> {
        self.sent.lock().unwrap().push(message.clone());
        match &self.result {
            Ok(id) => Ok(id.clone()),
            Err(reason) => Err(ProviderError::Api {
                status: 400,
                message: reason.clone(),
            }),
        }
    }
}

/// Creates a test application router backed by `provider` and a
/// temporary static root. Keep the returned `TempDir` alive for as
/// long as the router is used.
pub fn test_app(provider: Arc<FakeProvider>) -> (Router, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let web_root = dir.path().join("web");
    fs::create_dir_all(web_root.join("assets")).expect("Failed to create web root");
    fs::write(web_root.join("index.html"), INDEX_HTML).unwrap();
    fs::write(web_root.join("firebase-messaging-sw.js"), SERVICE_WORKER_JS).unwrap();

    // Sits next to the web root so traversal attempts have a target
    let secrets = dir.path().join("secrets");
    fs::create_dir_all(&secrets).unwrap();
    fs::write(secrets.join("serviceAccountKey.json"), "{\"private_key\":\"secret\"}").unwrap();

    let config = AppConfig {
        host: String::from("127.0.0.1"),
        port: String::from("8000"),
        credentials_path: secrets.join("serviceAccountKey.json"),
        web_root: PathBuf::from(&web_root),
    };
    let state = AppState::new(provider, config);
    (app(Arc::new(state)), dir)
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf-8")
}
