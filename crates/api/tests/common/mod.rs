//! Shared helpers for HTTP-level integration tests.
//!
//! Tests exercise the real router (same middleware stack as production)
//! via `tower::ServiceExt::oneshot`, without a TCP listener. The asset
//! store is rooted in a per-test temp directory.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use stockroom_api::config::ServerConfig;
use stockroom_api::router::build_app_router;
use stockroom_api::state::AppState;
use stockroom_storage::AssetStore;

/// Boundary used by the hand-rolled multipart bodies below.
const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

/// A built test application plus the temp dir backing its asset store.
///
/// Keep the struct alive for the duration of the test; dropping it removes
/// the upload directory.
pub struct TestApp {
    pub router: Router,
    _uploads: tempfile::TempDir,
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(upload_dir: &std::path::Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir: upload_dir.to_string_lossy().into_owned(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and a fresh temp upload directory.
pub fn build_test_app(pool: PgPool) -> TestApp {
    let uploads = tempfile::tempdir().expect("create temp upload dir");
    let config = test_config(uploads.path());

    // The temp dir already exists, so no async init is required here.
    let assets = AssetStore::new(uploads.path());

    let state = AppState {
        pool,
        assets: Arc::new(assets),
    };

    TestApp {
        router: build_app_router(state, &config),
        _uploads: uploads,
    }
}

impl TestApp {
    /// Send a GET request.
    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Send a DELETE request.
    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Send a POST request with a multipart form body.
    pub async fn post_form(
        &self,
        uri: &str,
        fields: &[(&str, &str)],
        file: Option<FilePart<'_>>,
    ) -> Response<Body> {
        self.send_form("POST", uri, fields, file).await
    }

    /// Send a PUT request with a multipart form body.
    pub async fn put_form(
        &self,
        uri: &str,
        fields: &[(&str, &str)],
        file: Option<FilePart<'_>>,
    ) -> Response<Body> {
        self.send_form("PUT", uri, fields, file).await
    }

    async fn send_form(
        &self,
        method: &str,
        uri: &str,
        fields: &[(&str, &str)],
        file: Option<FilePart<'_>>,
    ) -> Response<Body> {
        let body = multipart_body(fields, file);
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header(
                        "content-type",
                        format!("multipart/form-data; boundary={BOUNDARY}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

/// A file part of a multipart form: `(field_name, filename, bytes)`.
pub type FilePart<'a> = (&'a str, &'a str, &'a [u8]);

/// Assemble a multipart/form-data body by hand.
fn multipart_body(fields: &[(&str, &str)], file: Option<FilePart<'_>>) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    if let Some((name, filename, bytes)) = file {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body into raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
