//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p filebucket-api`.

#![allow(dead_code)]

pub mod storage;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use filebucket_api::setup::routes;
use filebucket_api::AppState;
use filebucket_core::Config;
use filebucket_storage::{S3Storage, Storage};
use object_store::memory::InMemory;
use std::collections::HashMap;
use std::sync::Arc;

pub const TEST_BUCKET: &str = "test-bucket";
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Test application: server plus the store behind it.
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<dyn Storage>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Configuration with defaults, overridden by `vars`.
pub fn test_config(vars: &[(&str, &str)]) -> Config {
    let mut lookup: HashMap<String, String> = HashMap::new();
    lookup.insert("S3_BUCKET".to_string(), TEST_BUCKET.to_string());
    lookup.insert("S3_REGION".to_string(), "us-east-1".to_string());
    for (k, v) in vars {
        lookup.insert(k.to_string(), v.to_string());
    }
    Config::from_lookup(|key| lookup.get(key).cloned()).expect("valid test config")
}

/// Build a server over the given storage.
pub fn setup_app_with_storage(config: Config, storage: Arc<dyn Storage>) -> TestApp {
    let state = Arc::new(AppState::new(config.clone(), storage.clone()));
    let router = routes::setup_routes(&config, state).expect("routes");
    let server = TestServer::new(router).expect("Failed to create test server");
    TestApp { server, storage }
}

/// Setup test app backed by an in-memory S3-compatible store.
pub fn setup_test_app() -> TestApp {
    let config = test_config(&[]);
    let storage: Arc<dyn Storage> = Arc::new(S3Storage::with_store(
        Arc::new(InMemory::new()),
        TEST_BUCKET.to_string(),
        "us-east-1".to_string(),
        None,
    ));
    setup_app_with_storage(config, storage)
}

/// Multipart form with a single `file` part.
pub fn file_form(filename: &str, content_type: &str, data: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(data).file_name(filename).mime_type(content_type),
    )
}
