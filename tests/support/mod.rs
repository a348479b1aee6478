#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode},
};
use lightsail_api::config::{Config, DatabaseSettings};
use lightsail_api::router::{AppState, app_router};
use serde_json::Value;
use tower::ServiceExt;

/// No `PG*` variables at all.
pub fn unconfigured_app() -> Router {
    app_router(AppState::from_config(&Config::default()))
}

/// Settings for the local compose database.
pub fn local_settings() -> DatabaseSettings {
    DatabaseSettings {
        host: Some("localhost".to_string()),
        port: Some("5432".to_string()),
        dbname: Some("postgres".to_string()),
        user: Some("postgres".to_string()),
        password: Some("postgres".to_string()),
        sslmode: Some("disable".to_string()),
    }
}

pub fn app_with_database(database: DatabaseSettings) -> Router {
    let cfg = Config {
        db_connect_timeout_secs: 1,
        database,
        ..Config::default()
    };
    app_router(AppState::from_config(&cfg))
}

/// Valid settings pointing at a port nothing listens on.
pub fn unreachable_app() -> Router {
    app_with_database(DatabaseSettings {
        host: Some("127.0.0.1".to_string()),
        port: Some("1".to_string()),
        sslmode: Some("require".to_string()),
        ..local_settings()
    })
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(builder.body(body).expect("failed to build request"))
        .await
        .expect("request failed")
}

/// Sends `body` without a content type.
pub async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .expect("failed to build request");
    app.clone().oneshot(request).await.expect("request failed")
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not utf-8")
}

pub async fn body_json(resp: Response<Body>) -> Value {
    serde_json::from_str(&body_string(resp).await).expect("response body was not json")
}

pub fn assert_server_error(status: StatusCode) {
    assert!(status.is_server_error(), "expected 5xx, got {status}");
}
