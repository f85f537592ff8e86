//! 통합 테스트 공용 헬퍼.
//!
//! 실제 라우터를 서버 기동 없이 `tower::ServiceExt::oneshot`으로 직접 호출합니다.
//! 테스트마다 임시 디렉토리의 db.json을 사용해 서로 격리됩니다.

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;

use wikindo::db::JsonDb;
use wikindo::routes::{self, AppState};

/// 임시 db.json을 쓰는 테스트용 앱과, 살아 있어야 하는 TempDir 핸들,
/// 그리고 백킹 파일 경로를 돌려줍니다.
pub fn build_test_app() -> (Router, TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let db_path = dir.path().join("db.json");
    let db = JsonDb::open(&db_path);
    let app = routes::api_router(AppState { db });
    (app, dir, db_path)
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn request_json(app: Router, method: Method, uri: &str, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    request_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    request_json(app, Method::PUT, uri, body).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// 응답 본문을 JSON으로 파싱합니다.
pub async fn body_json(res: Response) -> Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
