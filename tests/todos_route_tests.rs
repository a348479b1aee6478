mod support;

use axum::http::StatusCode;
use lightsail_api::config::DatabaseSettings;
use support::{
    app_with_database, assert_server_error, body_json, local_settings, send, send_raw,
    unconfigured_app, unreachable_app,
};

#[tokio::test]
async fn root_points_at_docs() {
    let app = unconfigured_app();
    let resp = send(&app, "GET", "/", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["docs"], "/docs");
}

#[tokio::test]
async fn list_without_configuration_is_a_server_error() {
    let app = unconfigured_app();
    let resp = send(&app, "GET", "/todos", None).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], "DATABASE_NOT_CONFIGURED");
}

#[tokio::test]
async fn list_with_unreachable_database_is_503() {
    let app = unreachable_app();
    let resp = send(&app, "GET", "/todos", None).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], "DATABASE_UNAVAILABLE");
}

#[tokio::test]
async fn every_database_route_fails_with_5xx_and_process_keeps_serving() {
    let app = unreachable_app();
    let calls = [
        ("POST", "/todos", Some(r#"{"title":"write docs"}"#)),
        ("PATCH", "/todos/1", None),
        ("DELETE", "/todos/1", None),
    ];
    for (method, uri, body) in calls {
        let resp = send(&app, method, uri, body).await;
        assert_server_error(resp.status());
    }

    let resp = send(&app, "GET", "/health", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn blank_title_is_rejected_before_database_access() {
    let app = unconfigured_app();
    let resp = send(&app, "POST", "/todos", Some(r#"{"title":"   "}"#)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert_eq!(body["error"]["message"], "title is required");
}

#[tokio::test]
async fn missing_title_field_is_unprocessable() {
    let app = unconfigured_app();
    let resp = send(&app, "POST", "/todos", Some(r#"{}"#)).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    assert!(body["error"]["message"].as_str().is_some());
}

#[tokio::test]
async fn malformed_json_is_a_json_bad_request() {
    let app = unconfigured_app();
    let resp = send(&app, "POST", "/todos", Some(r#"{"title":"#)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn body_without_json_content_type_is_unsupported() {
    let app = unconfigured_app();
    let resp = send_raw(&app, "POST", "/todos", r#"{"title":"x"}"#).await;
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(
        body_json(resp).await["error"]["code"],
        "UNSUPPORTED_MEDIA_TYPE"
    );
}

#[tokio::test]
async fn non_numeric_id_is_a_client_error() {
    let app = unconfigured_app();
    for method in ["PATCH", "DELETE"] {
        let resp = send(&app, method, "/todos/abc", None).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["error"]["code"], "BAD_REQUEST");
    }
}

#[tokio::test]
async fn invalid_sslmode_is_reported_as_not_configured() {
    let app = app_with_database(DatabaseSettings {
        sslmode: Some("sometimes".to_string()),
        ..local_settings()
    });
    let resp = send(&app, "GET", "/todos", None).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await["error"]["code"],
        "DATABASE_NOT_CONFIGURED"
    );

    let resp = send(&app, "GET", "/health", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
