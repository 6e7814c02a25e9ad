//! Shared helpers for the web API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};
use tempfile::TempDir;

use projecthub::file::FileStorage;
use projecthub::web::{create_router, AppState};
use projecthub::Database;

/// Request body limit used by the test router.
pub const BODY_LIMIT: usize = 16 * 1024 * 1024;

/// Description long enough for a task.
pub const TASK_DESCRIPTION: &str =
    "Collect the figures from every department and prepare the summary report.";

/// A test server backed by an in-memory database and a temporary storage root.
pub struct TestApp {
    pub server: TestServer,
    pub db: Database,
    pub storage_dir: TempDir,
}

/// Create a test server with an in-memory database.
pub async fn create_test_app() -> TestApp {
    create_test_app_with_body_limit(BODY_LIMIT).await
}

/// Create a test server whose router accepts at most `body_limit` bytes.
pub async fn create_test_app_with_body_limit(body_limit: usize) -> TestApp {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let storage_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = FileStorage::new(storage_dir.path()).expect("Failed to create storage");

    let app_state = Arc::new(AppState::new(db.clone(), storage));
    let router = create_router(app_state, &[], body_limit);
    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp {
        server,
        db,
        storage_dir,
    }
}

/// Create a project through the API and return its ID.
pub async fn create_project(server: &TestServer, name: &str) -> i64 {
    let response = server
        .post("/api/v1/projects")
        .json(&json!({
            "name": name,
            "description": format!("{} project", name)
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["data"]["id"].as_i64().unwrap()
}

/// Create a tag through the API and return its ID.
pub async fn create_tag(server: &TestServer, name: &str) -> i64 {
    let response = server
        .post("/api/v1/tasks/tags")
        .json(&json!({ "name": name }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["data"]["id"].as_i64().unwrap()
}

/// A valid registration body.
pub fn registration(username: &str, email: &str) -> Value {
    json!({
        "username": username,
        "first_name": "Test",
        "last_name": "User",
        "email": email,
        "phone": "+1234567890",
        "position": "DESIGNER",
        "password": "Password123",
        "re_password": "Password123"
    })
}

/// Field-level messages of an error response.
pub fn field_messages(body: &Value, field: &str) -> Vec<String> {
    body["error"]["details"][field]
        .as_array()
        .map(|messages| {
            messages
                .iter()
                .filter_map(|m| m.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
