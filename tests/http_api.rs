//! End-to-end tests of the HTTP API against a temporary database file.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use roster::http::{AppState, build_router};
use roster::Database;
use roster::db::{SEED_NOTES, SEED_STUDENTS};
use serde_json::{Value, json};
use tempfile::{TempDir, tempdir};
use tower::ServiceExt;

fn seeded_app() -> (TempDir, Router) {
    let dir = tempdir().expect("failed to create temp dir");
    let db = Database::new(dir.path().join("api.db"));
    db.initialize().expect("failed to initialize database");
    (dir, build_router(AppState::new(db, true)))
}

/// Router whose database path can never be opened.
fn broken_app(fallback: bool) -> (TempDir, Router) {
    let dir = tempdir().expect("failed to create temp dir");
    let db = Database::new(dir.path().join("missing").join("api.db"));
    (dir, build_router(AppState::new(db, fallback)))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn new_student() -> Value {
    json!({
        "student_id": "2024099",
        "name": "测试",
        "gender": "男",
        "age": 20,
        "major": "测试专业",
        "score": 100
    })
}

// --- Health ---

#[tokio::test]
async fn health_reports_ok() {
    let (_dir, app) = seeded_app();

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

// --- Students ---

#[tokio::test]
async fn list_students_returns_seed_rows_newest_first() {
    let (_dir, app) = seeded_app();

    let (status, body) = send(&app, "GET", "/api/students", None).await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), SEED_STUDENTS.len());
    assert_eq!(rows[0]["id"], 3);
    assert_eq!(rows[2]["student_id"], "2024001");
}

#[tokio::test]
async fn create_student_returns_stored_row() {
    let (_dir, app) = seeded_app();

    let (status, body) = send(&app, "POST", "/api/students", Some(new_student())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 100.0);
    assert_eq!(body["student_id"], "2024099");
    assert!(body["created_at"].is_string());

    let id = body["id"].as_i64().unwrap();
    let (status, fetched) = send(&app, "GET", &format!("/api/students/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn create_student_out_of_bounds_is_rejected() {
    let (_dir, app) = seeded_app();
    let mut too_young = new_student();
    too_young["age"] = json!(15);
    let mut over_score = new_student();
    over_score["score"] = json!(100.5);

    let (status, body) = send(&app, "POST", "/api/students", Some(too_young)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");

    let (status, _) = send(&app, "POST", "/api/students", Some(over_score)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, list) = send(&app, "GET", "/api/students", None).await;
    assert_eq!(list.as_array().unwrap().len(), SEED_STUDENTS.len());
}

#[tokio::test]
async fn create_student_missing_field_is_client_error() {
    let (_dir, app) = seeded_app();
    let mut incomplete = new_student();
    incomplete.as_object_mut().unwrap().remove("major");

    let (status, body) = send(&app, "POST", "/api/students", Some(incomplete)).await;

    assert!(status.is_client_error());
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn get_missing_student_is_404() {
    let (_dir, app) = seeded_app();

    let (status, body) = send(&app, "GET", "/api/students/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "学生不存在");
}

#[tokio::test]
async fn non_numeric_id_is_400() {
    let (_dir, app) = seeded_app();

    let (status, body) = send(&app, "GET", "/api/students/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn update_student_replaces_fields() {
    let (_dir, app) = seeded_app();
    let mut changed = new_student();
    changed["name"] = json!("改名");
    changed["age"] = json!(30);

    let (status, body) = send(&app, "PUT", "/api/students/1", Some(changed)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "改名");
    assert_eq!(body["age"], 30);
}

#[tokio::test]
async fn update_missing_student_is_404_and_creates_nothing() {
    let (_dir, app) = seeded_app();

    let (status, _) = send(&app, "PUT", "/api/students/999", Some(new_student())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, "GET", "/api/students", None).await;
    assert_eq!(list.as_array().unwrap().len(), SEED_STUDENTS.len());
}

#[tokio::test]
async fn delete_student_then_delete_again_is_404() {
    let (_dir, app) = seeded_app();

    let (status, body) = send(&app, "DELETE", "/api/students/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "删除成功");

    let (status, _) = send(&app, "DELETE", "/api/students/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// --- Notes ---

#[tokio::test]
async fn list_notes_is_pinned_first() {
    let (_dir, app) = seeded_app();
    send(&app, "POST", "/api/notes", Some(json!({"title": "新的"}))).await;

    let (status, body) = send(&app, "GET", "/api/notes", None).await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), SEED_NOTES.len() + 1);
    assert_eq!(rows[0]["is_pinned"], 1);
    assert_eq!(rows[1]["title"], "新的");
}

#[tokio::test]
async fn create_note_applies_defaults() {
    let (_dir, app) = seeded_app();

    let (status, body) = send(&app, "POST", "/api/notes", Some(json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "新便签");
    assert_eq!(body["content"], "");
    assert_eq!(body["color"], "yellow");
    assert_eq!(body["is_pinned"], 0);
}

#[tokio::test]
async fn create_note_with_long_title_is_rejected() {
    let (_dir, app) = seeded_app();
    let title = "x".repeat(101);

    let (status, body) = send(&app, "POST", "/api/notes", Some(json!({"title": title}))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn search_notes_filters_by_substring() {
    let (_dir, app) = seeded_app();

    let (status, body) = send(&app, "GET", "/api/notes?search=%E4%BD%9C%E4%B8%9A", None).await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["content"], "完成作业");

    let (_, none) = send(&app, "GET", "/api/notes?search=nothing-here", None).await;
    assert!(none.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn empty_search_lists_everything() {
    let (_dir, app) = seeded_app();

    let (_, body) = send(&app, "GET", "/api/notes?search=", None).await;

    assert_eq!(body.as_array().unwrap().len(), SEED_NOTES.len());
}

#[tokio::test]
async fn toggle_pin_flips_and_404s_when_missing() {
    let (_dir, app) = seeded_app();

    let (status, body) = send(&app, "POST", "/api/notes/1/toggle-pin", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_pinned"], 0);

    let (_, body) = send(&app, "POST", "/api/notes/1/toggle-pin", None).await;
    assert_eq!(body["is_pinned"], 1);

    let (status, body) = send(&app, "POST", "/api/notes/999/toggle-pin", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "便签不存在");
}

#[tokio::test]
async fn update_and_delete_note() {
    let (_dir, app) = seeded_app();

    let (status, body) = send(
        &app,
        "PUT",
        "/api/notes/2",
        Some(json!({"title": "改", "content": "新内容", "color": "green", "is_pinned": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["color"], "green");
    assert_eq!(body["is_pinned"], 1);

    let (status, _) = send(&app, "DELETE", "/api/notes/2", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", "/api/notes/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// --- Degraded mode ---

#[tokio::test]
async fn list_endpoints_fall_back_when_store_is_unreachable() {
    let (_dir, app) = broken_app(true);

    let (status, students) = send(&app, "GET", "/api/students", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(students.as_array().unwrap().len(), 2);

    let (status, notes) = send(&app, "GET", "/api/notes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(notes[0]["title"], "欢迎使用");
}

#[tokio::test]
async fn lookups_never_fall_back() {
    let (_dir, app) = broken_app(true);

    let (status, body) = send(&app, "GET", "/api/students/1", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal_error");
}

#[tokio::test]
async fn disabled_fallback_reports_store_errors() {
    let (_dir, app) = broken_app(false);

    let (status, _) = send(&app, "GET", "/api/students", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send(&app, "GET", "/api/notes", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
