use axum::{body::to_bytes, body::Body, http::Request};
use coinboard_server::{api::app_router, build_state, config::Config};
use tempfile::tempdir;
use tower::ServiceExt;

#[tokio::test]
async fn serves_static_assets() {
    let data_dir = tempdir().unwrap();
    let static_dir = tempdir().unwrap();
    std::fs::write(static_dir.path().join("style.css"), "body { color: red; }").unwrap();

    let config = Config {
        static_dir: static_dir.path().to_string_lossy().to_string(),
        snapshot_path: data_dir.path().join("crypto_data.csv"),
        ..Config::default()
    };
    let state = build_state(&config).unwrap();
    let app = app_router(state, &config);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/static/style.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(body, "body { color: red; }".as_bytes());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/static/missing.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}
