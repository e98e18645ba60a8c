//! Upload / list / get API integration tests.
//!
//! Run with: `cargo test -p filebucket-api --test files_test`

mod helpers;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use helpers::storage::{Failure, FailingStorage, LEAKY_BACKEND_MESSAGE};
use helpers::{file_form, setup_app_with_storage, setup_test_app, test_config, MAX_FILE_SIZE};
use serde_json::Value;
use std::sync::Arc;

#[tokio::test]
async fn test_root_returns_welcome_message() {
    let app = setup_test_app();
    let response = app.client().get("/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["message"].as_str().unwrap().starts_with("Welcome"));
}

#[tokio::test]
async fn test_health_is_alive() {
    let app = setup_test_app();
    let response = app.client().get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), serde_json::json!({ "status": "alive" }));
}

#[tokio::test]
async fn test_upload_returns_constructed_url() {
    let app = setup_test_app();
    let response = app
        .client()
        .post("/upload")
        .multipart(file_form("report.pdf", "application/pdf", b"%PDF-1.7".to_vec()))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "File uploaded successfully");
    assert_eq!(
        body["file_url"],
        "https://test-bucket.s3.us-east-1.amazonaws.com/report.pdf"
    );
}

#[tokio::test]
async fn test_upload_then_get_round_trips_bytes() {
    let app = setup_test_app();
    let payload: Vec<u8> = (0..=255u8).cycle().take(300_000).collect();

    app.client()
        .post("/upload")
        .multipart(file_form("a.jpg", "image/jpeg", payload.clone()))
        .await
        .assert_status_ok();

    let response = app.client().get("/files/a.jpg").await;
    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "application/octet-stream");
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"a.jpg\""
    );
    assert_eq!(response.as_bytes().as_ref(), payload.as_slice());
}

#[tokio::test]
async fn test_second_upload_overwrites_first() {
    let app = setup_test_app();
    for payload in [b"first".to_vec(), b"second".to_vec()] {
        app.client()
            .post("/upload")
            .multipart(file_form("a.png", "image/png", payload))
            .await
            .assert_status_ok();
    }

    let response = app.client().get("/files/a.png").await;
    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), b"second");

    let listing: Value = app.client().get("/files").await.json();
    assert_eq!(listing, serde_json::json!({ "files": ["a.png"] }));
}

#[tokio::test]
async fn test_list_empty_bucket_is_ok() {
    let app = setup_test_app();
    let response = app.client().get("/files").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), serde_json::json!({ "files": [] }));
}

#[tokio::test]
async fn test_list_contains_uploaded_files() {
    let app = setup_test_app();
    for name in ["b.pdf", "a.jpg"] {
        let content_type = if name.ends_with(".pdf") {
            "application/pdf"
        } else {
            "image/jpeg"
        };
        app.client()
            .post("/upload")
            .multipart(file_form(name, content_type, b"x".to_vec()))
            .await
            .assert_status_ok();
    }

    let body: Value = app.client().get("/files").await.json();
    let mut files: Vec<String> = body["files"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    files.sort();
    assert_eq!(files, vec!["a.jpg", "b.pdf"]);
}

#[tokio::test]
async fn test_nested_keys_are_addressable() {
    let app = setup_test_app();
    app.client()
        .post("/upload")
        .multipart(file_form("reports/q1.pdf", "application/pdf", b"q1".to_vec()))
        .await
        .assert_status_ok();

    let response = app.client().get("/files/reports/q1.pdf").await;
    response.assert_status_ok();
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"q1.pdf\""
    );
    assert_eq!(response.as_bytes().as_ref(), b"q1");
}

#[tokio::test]
async fn test_keys_with_reserved_characters_round_trip() {
    let app = setup_test_app();
    for (name, path) in [
        ("photo[1].png", "/files/photo%5B1%5D.png"),
        ("100%.png", "/files/100%25.png"),
    ] {
        let response = app
            .client()
            .post("/upload")
            .multipart(file_form(name, "image/png", name.as_bytes().to_vec()))
            .await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>()["file_url"],
            format!("https://test-bucket.s3.us-east-1.amazonaws.com{}", &path[6..])
        );

        let response = app.client().get(path).await;
        response.assert_status_ok();
        assert_eq!(response.as_bytes().as_ref(), name.as_bytes());
    }

    let listing: Value = app.client().get("/files").await.json();
    let mut files: Vec<String> = serde_json::from_value(listing["files"].clone()).unwrap();
    files.sort();
    assert_eq!(files, vec!["100%.png", "photo[1].png"]);
}

#[tokio::test]
async fn test_key_with_empty_segment_is_rejected() {
    let app = setup_test_app();
    let response = app
        .client()
        .post("/upload")
        .multipart(file_form("a//b.png", "image/png", b"x".to_vec()))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "INVALID_INPUT");
    assert!(app.storage.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_missing_file_is_404() {
    let app = setup_test_app();
    let response = app.client().get("/files/missing.pdf").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["detail"], "File not found");
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_unsupported_content_type_is_rejected() {
    let app = setup_test_app();
    let response = app
        .client()
        .post("/upload")
        .multipart(file_form("a.txt", "text/plain", b"hello".to_vec()))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["detail"], "Unsupported file type.");
    assert_eq!(body["code"], "UNSUPPORTED_FILE_TYPE");

    // Nothing was written
    let listing: Value = app.client().get("/files").await.json();
    assert_eq!(listing["files"], serde_json::json!([]));
}

#[tokio::test]
async fn test_file_at_size_limit_is_accepted() {
    let app = setup_test_app();
    let response = app
        .client()
        .post("/upload")
        .multipart(file_form("a.jpg", "image/jpeg", vec![0u8; MAX_FILE_SIZE]))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_file_over_size_limit_is_rejected() {
    let app = setup_test_app();
    let response = app
        .client()
        .post("/upload")
        .multipart(file_form("a.jpg", "image/jpeg", vec![0u8; MAX_FILE_SIZE + 1]))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["detail"], "File size exceeds the maximum limit of 5 MB.");
    assert_eq!(body["code"], "FILE_TOO_LARGE");
}

#[tokio::test]
async fn test_body_far_over_limit_is_rejected_as_too_large() {
    let app = setup_test_app();
    let response = app
        .client()
        .post("/upload")
        .multipart(file_form("a.jpg", "image/jpeg", vec![0u8; MAX_FILE_SIZE * 2]))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["detail"], "File size exceeds the maximum limit of 5 MB.");
    assert_eq!(body["code"], "FILE_TOO_LARGE");
    assert!(app.storage.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_zero_byte_file_is_accepted() {
    let app = setup_test_app();
    app.client()
        .post("/upload")
        .multipart(file_form("empty.png", "image/png", Vec::new()))
        .await
        .assert_status_ok();

    let response = app.client().get("/files/empty.png").await;
    response.assert_status_ok();
    assert!(response.as_bytes().is_empty());
}

#[tokio::test]
async fn test_missing_file_field_is_rejected() {
    let app = setup_test_app();
    let response = app
        .client()
        .post("/upload")
        .multipart(MultipartForm::new().add_text("note", "no file here"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["detail"], "No file provided");
}

#[tokio::test]
async fn test_multiple_file_fields_are_rejected() {
    let app = setup_test_app();
    let form = MultipartForm::new()
        .add_part(
            "file",
            Part::bytes(b"one".to_vec())
                .file_name("a.png")
                .mime_type("image/png"),
        )
        .add_part(
            "file",
            Part::bytes(b"two".to_vec())
                .file_name("b.png")
                .mime_type("image/png"),
        );
    let response = app.client().post("/upload").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_non_multipart_body_is_rejected() {
    let app = setup_test_app();
    let response = app
        .client()
        .post("/upload")
        .json(&serde_json::json!({ "file": "a.png" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_path_traversal_key_is_rejected() {
    let app = setup_test_app();
    let response = app
        .client()
        .post("/upload")
        .multipart(file_form("../escape.png", "image/png", b"x".to_vec()))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_backend_failures_are_500_without_leaking() {
    for failure in [Failure::Backend, Failure::Credentials] {
        let app = setup_app_with_storage(test_config(&[]), Arc::new(FailingStorage::new(failure)));

        let responses = [
            app.client()
                .post("/upload")
                .multipart(file_form("a.png", "image/png", b"x".to_vec()))
                .await,
            app.client().get("/files").await,
            app.client().get("/files/a.png").await,
        ];

        for response in responses {
            response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
            let text = response.text();
            assert!(!text.contains(LEAKY_BACKEND_MESSAGE));
            assert!(!text.contains("arn:aws"));
            let body: Value = response.json();
            assert_eq!(body["detail"], "Internal Server Error");
            assert!(body.get("details").is_none());
        }
    }
}

#[tokio::test]
async fn test_request_id_is_echoed_or_generated() {
    let app = setup_test_app();

    let response = app
        .client()
        .get("/health")
        .add_header("X-Request-ID", "req-123")
        .await;
    assert_eq!(response.header("x-request-id"), "req-123");

    let response = app.client().get("/health").await;
    let generated = response.header("x-request-id");
    assert_eq!(generated.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn test_security_headers_are_set() {
    let app = setup_test_app();
    let response = app.client().get("/files").await;

    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(response.header("x-frame-options"), "DENY");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_test_app();
    let response = app.client().get("/api/openapi.json").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["paths"].get("/upload").is_some());
    assert!(body["paths"].get("/files/{name}").is_some());
}
