//! Web API Task Tests
//!
//! Integration tests for task and tag endpoints.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use common::{create_project, create_tag, create_test_app, field_messages, TASK_DESCRIPTION};
use serde_json::{json, Value};

fn future_deadline(days: i64) -> String {
    (Utc::now() + Duration::days(days)).to_rfc3339()
}

fn task_body(project: &str, deadline: &str, tags: Vec<i64>) -> Value {
    json!({
        "name": "Prepare quarterly report",
        "description": TASK_DESCRIPTION,
        "priority": 3,
        "project": project,
        "tags": tags,
        "deadline": deadline
    })
}

async fn create_task(server: &TestServer, body: Value) -> Value {
    let response = server.post("/api/v1/tasks").json(&body).await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

// ============================================================================
// Tasks
// ============================================================================

#[tokio::test]
async fn test_list_tasks_empty() {
    let app = create_test_app().await;

    app.server
        .get("/api/v1/tasks")
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_create_task() {
    let app = create_test_app().await;
    create_project(&app.server, "Acme Inc").await;
    let tag_id = create_tag(&app.server, "Finance").await;

    let body = create_task(
        &app.server,
        task_body("Acme Inc", &future_deadline(7), vec![tag_id]),
    )
    .await;

    assert_eq!(body["data"]["name"], "Prepare quarterly report");
    assert_eq!(body["data"]["priority"], 3);
    assert_eq!(body["data"]["priority_label"], "High");
    assert_eq!(body["data"]["status"], "new");
    assert_eq!(body["data"]["project"], "Acme Inc");
    assert_eq!(body["data"]["tags"], json!([tag_id]));
}

#[tokio::test]
async fn test_create_task_validation_messages() {
    let app = create_test_app().await;
    create_project(&app.server, "Acme Inc").await;

    let mut body = task_body("Acme Inc", &future_deadline(7), vec![]);
    body["name"] = json!("Too short");
    let response = app.server.post("/api/v1/tasks").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        field_messages(&response.json(), "name"),
        vec!["Name must be at least 10 characters".to_string()]
    );

    let mut body = task_body("Acme Inc", &future_deadline(7), vec![]);
    body["priority"] = json!(99);
    let response = app.server.post("/api/v1/tasks").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        field_messages(&response.json(), "priority"),
        vec!["\"99\" is not a valid choice.".to_string()]
    );
}

#[tokio::test]
async fn test_create_task_deadline_in_past() {
    let app = create_test_app().await;
    create_project(&app.server, "Acme Inc").await;

    let response = app
        .server
        .post("/api/v1/tasks")
        .json(&task_body("Acme Inc", &future_deadline(-1), vec![]))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        field_messages(&response.json(), "deadline"),
        vec!["Deadline time can not be in past".to_string()]
    );
}

#[tokio::test]
async fn test_create_task_unknown_references() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/v1/tasks")
        .json(&task_body("Nowhere", &future_deadline(7), vec![42]))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        field_messages(&body, "project"),
        vec!["Project with name=Nowhere does not exist.".to_string()]
    );
    assert_eq!(
        field_messages(&body, "tags"),
        vec!["Invalid pk \"42\" - object does not exist.".to_string()]
    );
}

#[tokio::test]
async fn test_list_tasks_ordered_and_filtered() {
    let app = create_test_app().await;
    create_project(&app.server, "Acme Inc").await;
    create_project(&app.server, "Other").await;

    let mut late = task_body("Acme Inc", &future_deadline(30), vec![]);
    late["name"] = json!("Late acme deliverable");
    create_task(&app.server, late).await;
    let mut early = task_body("Acme Inc", &future_deadline(2), vec![]);
    early["name"] = json!("Early acme deliverable");
    create_task(&app.server, early).await;
    create_task(&app.server, task_body("Other", &future_deadline(5), vec![])).await;

    let response = app.server.get("/api/v1/tasks").await;
    response.assert_status_ok();
    let body: Value = response.json();
    let tasks = body["data"].as_array().unwrap();
    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[0]["name"], "Early acme deliverable");
    assert_eq!(tasks[2]["name"], "Late acme deliverable");

    let response = app
        .server
        .get("/api/v1/tasks")
        .add_query_param("project", "Acme Inc")
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_task_partial() {
    let app = create_test_app().await;
    create_project(&app.server, "Acme Inc").await;
    let created = create_task(
        &app.server,
        task_body("Acme Inc", &future_deadline(7), vec![]),
    )
    .await;
    let task_id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .server
        .put(&format!("/api/v1/tasks/{}", task_id))
        .json(&json!({ "status": "in_progress", "priority": 4 }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"]["status"], "in_progress");
    assert_eq!(body["data"]["priority_label"], "Critical");
    assert_eq!(body["data"]["name"], "Prepare quarterly report");
}

#[tokio::test]
async fn test_update_task_invalid_status_and_past_deadline() {
    let app = create_test_app().await;
    create_project(&app.server, "Acme Inc").await;
    let created = create_task(
        &app.server,
        task_body("Acme Inc", &future_deadline(7), vec![]),
    )
    .await;
    let task_id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .server
        .put(&format!("/api/v1/tasks/{}", task_id))
        .json(&json!({ "status": "done" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = app
        .server
        .put(&format!("/api/v1/tasks/{}", task_id))
        .json(&json!({ "deadline": future_deadline(-2) }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_task_not_found() {
    let app = create_test_app().await;

    app.server
        .get("/api/v1/tasks/999")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server
        .put("/api/v1/tasks/999")
        .json(&json!({ "status": "closed" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server
        .delete("/api/v1/tasks/999")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_task() {
    let app = create_test_app().await;
    create_project(&app.server, "Acme Inc").await;
    let created = create_task(
        &app.server,
        task_body("Acme Inc", &future_deadline(7), vec![]),
    )
    .await;
    let task_id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .server
        .delete(&format!("/api/v1/tasks/{}", task_id))
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Task deleted successfully" }));
}

#[tokio::test]
async fn test_deleting_project_removes_tasks() {
    let app = create_test_app().await;
    let project_id = create_project(&app.server, "Acme Inc").await;
    create_task(&app.server, task_body("Acme Inc", &future_deadline(7), vec![])).await;

    app.server
        .delete(&format!("/api/v1/projects/{}", project_id))
        .await
        .assert_status_ok();
    app.server
        .get("/api/v1/tasks")
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

// ============================================================================
// Tags
// ============================================================================

#[tokio::test]
async fn test_list_tags_empty() {
    let app = create_test_app().await;

    app.server
        .get("/api/v1/tasks/tags")
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_tag_crud() {
    let app = create_test_app().await;
    let tag_id = create_tag(&app.server, "Finance").await;

    let response = app
        .server
        .get(&format!("/api/v1/tasks/tags/{}", tag_id))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["name"], "Finance");

    let response = app
        .server
        .put(&format!("/api/v1/tasks/tags/{}", tag_id))
        .json(&json!({ "name": "Accounting" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["name"], "Accounting");

    let response = app
        .server
        .delete(&format!("/api/v1/tasks/tags/{}", tag_id))
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Successfully deleted" }));

    app.server
        .get(&format!("/api/v1/tasks/tags/{}", tag_id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_tag_invalid() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/v1/tasks/tags")
        .json(&json!({ "name": "ab1" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(field_messages(&response.json(), "name").len(), 1);

    let response = app
        .server
        .post("/api/v1/tasks/tags")
        .json(&json!({ "name": 1234 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_tag_duplicate() {
    let app = create_test_app().await;
    create_tag(&app.server, "Finance").await;

    app.server
        .post("/api/v1/tasks/tags")
        .json(&json!({ "name": "Finance" }))
        .await
        .assert_status(StatusCode::CONFLICT);
}
