//! End-to-end tests against the local filesystem backend built from configuration.
//!
//! Run with: `cargo test -p filebucket-api --test local_backend_test`

mod helpers;

use filebucket_api::setup::storage::setup_storage;
use filebucket_core::StorageBackend;
use helpers::{file_form, setup_app_with_storage, test_config};
use serde_json::Value;

#[tokio::test]
async fn test_local_backend_upload_list_get() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().display().to_string();
    let config = test_config(&[
        ("STORAGE_BACKEND", "local"),
        ("LOCAL_STORAGE_PATH", &path),
        ("LOCAL_STORAGE_BASE_URL", "http://localhost:8000/media"),
    ]);

    let storage = setup_storage(&config).await.unwrap();
    assert_eq!(storage.backend_type(), StorageBackend::Local);
    let app = setup_app_with_storage(config, storage);

    let response = app
        .client()
        .post("/upload")
        .multipart(file_form("scan 1.pdf", "application/pdf", b"%PDF".to_vec()))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["file_url"],
        "http://localhost:8000/media/scan%201.pdf"
    );
    assert!(dir.path().join("scan 1.pdf").is_file());

    let listing: Value = app.client().get("/files").await.json();
    assert_eq!(listing, serde_json::json!({ "files": ["scan 1.pdf"] }));

    let response = app.client().get("/files/scan%201.pdf").await;
    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), b"%PDF");
}
