mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use common::{ADMIN_KEY, TEST_PORT, TempDb, test_state};
use pol_designer::router::designer_router;
use serde_json::{Value, json};
use tower::ServiceExt;

fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {ADMIN_KEY}"));
    match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .expect("failed to build request"),
        None => builder.body(Body::empty()).expect("failed to build request"),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    (status, body.to_vec())
}

async fn send_json(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, req).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("response body was not json")
    };
    (status, value)
}

#[tokio::test]
async fn admin_routes_reject_missing_or_wrong_key() {
    let db = TempDb::new("routes-auth");
    let app = designer_router(test_state(&db).await);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/settings/db-status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let (status, body) = send_json(
        &app,
        Request::builder()
            .method("POST")
            .uri("/api/settings/db-reset")
            .header(header::AUTHORIZATION, "Bearer wrong")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    let (status, _) = send_json(
        &app,
        Request::builder()
            .uri("/api/settings/db-status")
            .header("x-admin-key", ADMIN_KEY)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn health_is_public() {
    let db = TempDb::new("routes-health");
    let app = designer_router(test_state(&db).await);
    for uri in ["/health", "/api/health"] {
        let (status, body) =
            send_json(&app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok", "port": TEST_PORT}));
    }
}

#[tokio::test]
async fn db_status_reports_sqlite_connected() {
    let db = TempDb::new("routes-status");
    let app = designer_router(test_state(&db).await);
    let (status, body) = send_json(&app, request("GET", "/api/settings/db-status", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"type": "SQLite", "status": "Connected"}));
}

#[tokio::test]
async fn smtp_settings_round_trip() {
    let db = TempDb::new("routes-smtp");
    let app = designer_router(test_state(&db).await);

    let (status, body) = send_json(&app, request("GET", "/api/settings/smtp", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let cfg = json!({
        "host": "smtp.example.com",
        "port": 587,
        "secure": true,
        "username": "ops",
        "password": "pw",
        "fromAddress": "ops@example.com"
    });
    let (status, body) =
        send_json(&app, request("POST", "/api/settings/smtp", Some(cfg.clone()))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, cfg);

    let (_, body) = send_json(&app, request("GET", "/api/settings/smtp", None)).await;
    assert_eq!(body, cfg);
}

#[tokio::test]
async fn malformed_smtp_payload_is_a_validation_error() {
    let db = TempDb::new("routes-smtp-invalid");
    let app = designer_router(test_state(&db).await);

    let (status, body) = send_json(
        &app,
        request("POST", "/api/settings/smtp", Some(json!({"host": 1}))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, _) = send_json(
        &app,
        request(
            "POST",
            "/api/settings/smtp",
            Some(json!({"host": "h", "port": 0, "fromAddress": "a@b"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send_json(&app, request("GET", "/api/settings/smtp", None)).await;
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn translation_overrides_lifecycle() {
    let db = TempDb::new("routes-translations");
    let app = designer_router(test_state(&db).await);

    let (status, body) =
        send_json(&app, request("GET", "/api/settings/translations/t", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (status, body) = send_json(
        &app,
        request(
            "POST",
            "/api/settings/translations/t",
            Some(json!({"a": "1", "b": "9"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"b": "9"}));

    let (_, body) = send_json(&app, request("GET", "/api/settings/translations/t", None)).await;
    assert_eq!(body, json!({"b": "9"}));
    let (_, body) = send_json(
        &app,
        request("GET", "/api/settings/translations/t/effective", None),
    )
    .await;
    assert_eq!(body, json!({"a": "1", "b": "9"}));

    let (status, body) = send(&app, request("DELETE", "/api/settings/translations/t", None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
    let (status, _) = send(&app, request("DELETE", "/api/settings/translations/t", None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send_json(
        &app,
        request("GET", "/api/settings/translations/t/effective", None),
    )
    .await;
    assert_eq!(body, json!({"a": "1", "b": "2"}));
}

#[tokio::test]
async fn translations_reject_non_string_values_and_unknown_locales() {
    let db = TempDb::new("routes-translations-invalid");
    let app = designer_router(test_state(&db).await);

    let (status, body) = send_json(
        &app,
        request(
            "POST",
            "/api/settings/translations/fa",
            Some(json!({"app.title": 5})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, body) =
        send_json(&app, request("GET", "/api/settings/translations/xx", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn backup_downloads_the_database_file() {
    let db = TempDb::new("routes-backup");
    let app = designer_router(test_state(&db).await);

    let resp = app
        .clone()
        .oneshot(request("POST", "/api/settings/db-backup", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"pol_designer_backup_"));
    assert!(disposition.ends_with(".db\""));

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(body.to_vec(), std::fs::read(&db.path).unwrap());
}

#[tokio::test]
async fn backup_without_database_file_is_not_found() {
    let db = TempDb::new("routes-backup-missing");
    let app = designer_router(test_state(&db).await);
    std::fs::remove_file(&db.path).unwrap();

    let (status, body) = send_json(&app, request("POST", "/api/settings/db-backup", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Database file not found.");
}

#[tokio::test]
async fn reset_restores_seed_state() {
    let db = TempDb::new("routes-reset");
    let state = test_state(&db).await;
    let store = state.store.clone();
    let app = designer_router(state);

    send_json(
        &app,
        request(
            "POST",
            "/api/settings/smtp",
            Some(json!({"host": "h", "port": 25, "fromAddress": "a@b"})),
        ),
    )
    .await;
    send_json(
        &app,
        request("POST", "/api/settings/translations/t", Some(json!({"a": "x"}))),
    )
    .await;

    let (status, body) = send_json(&app, request("POST", "/api/settings/db-reset", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Database reset successfully"}));

    let (_, body) = send_json(&app, request("GET", "/api/settings/smtp", None)).await;
    assert_eq!(body, Value::Null);
    let (_, body) = send_json(&app, request("GET", "/api/settings/translations/t", None)).await;
    assert_eq!(body, json!({}));
    assert_eq!(store.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn failed_reset_reports_generic_reason() {
    let db = TempDb::new("routes-reset-failure");
    let state = test_state(&db).await;
    state.store.pool().close().await;
    let app = designer_router(state);

    let (status, body) = send_json(&app, request("POST", "/api/settings/db-reset", None)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": {"code": "RESET_FAILED", "message": "Database reset failed."}})
    );
}
