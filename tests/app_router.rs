mod common;

use api_microservices::routes::app_router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

fn static_dir() -> String {
    format!("{}/public", env!("CARGO_MANIFEST_DIR"))
}

async fn get(uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let app = app_router(common::create_test_state(), &static_dir());

    let request = Request::builder()
        .uri(uri)
        .header(header::ORIGIN, "https://www.freecodecamp.org")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, headers, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn test_index_page() {
    let (status, _, body) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/api/shorturl"));
    assert!(body.contains("/api/users/{_id}/logs"));
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let (status, _, body) = get("/api/hello/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"greeting":"hello API"}"#);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (_, headers, _) = get("/api/time/0").await;

    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_static_assets_fallback() {
    let (status, headers, _) = get("/style.css").await;

    assert_eq!(status, StatusCode::OK);
    assert!(
        headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/css")
    );
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let (status, _, _) = get("/no/such/file.txt").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
