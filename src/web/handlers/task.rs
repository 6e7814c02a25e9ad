//! Task handlers.

use axum::{
    extract::{Path, Query, State},
    response::Response,
    Json,
};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;

use super::{created, list_response, AppState};
use crate::project::ProjectRepository;
use crate::task::validation::{parse_priority, parse_status, validate_deadline};
use crate::task::{NewTask, TagRepository, TaskRepository, TaskStatus, TaskUpdate};
use crate::web::dto::{
    ApiResponse, CreateTaskRequest, MessageResponse, TaskListQuery, TaskResponse,
    UpdateTaskRequest, ValidatedJson,
};
use crate::web::error::ApiError;

/// Field errors found while resolving task references.
#[derive(Default)]
struct FieldErrors(HashMap<String, Vec<String>>);

impl FieldErrors {
    fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    fn into_result(self) -> Result<(), ApiError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation(self.0))
        }
    }
}

async fn resolve_project(
    state: &AppState,
    name: &str,
    errors: &mut FieldErrors,
) -> Result<Option<i64>, ApiError> {
    let project = ProjectRepository::new(state.db.pool())
        .get_by_name(name)
        .await?;
    if project.is_none() {
        errors.add(
            "project",
            format!("Project with name={} does not exist.", name),
        );
    }
    Ok(project.map(|p| p.id))
}

async fn check_tags(
    state: &AppState,
    tags: &[i64],
    errors: &mut FieldErrors,
) -> Result<(), ApiError> {
    let missing = TagRepository::new(state.db.pool())
        .missing_ids(tags)
        .await?;
    for id in missing {
        errors.add("tags", format!("Invalid pk \"{}\" - object does not exist.", id));
    }
    Ok(())
}

fn check_deadline(deadline: &DateTime<Utc>, errors: &mut FieldErrors) {
    if let Err(e) = validate_deadline(deadline, &Utc::now()) {
        errors.add("deadline", e.to_string());
    }
}

/// GET /api/v1/tasks - List tasks ordered by deadline.
#[utoipa::path(
    get,
    path = "/api/v1/tasks",
    tag = "tasks",
    params(TaskListQuery),
    responses(
        (status = 200, description = "List of tasks", body = Vec<TaskResponse>),
        (status = 204, description = "No tasks")
    )
)]
pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TaskListQuery>,
) -> Result<Response, ApiError> {
    let tasks = TaskRepository::new(state.db.pool())
        .list(query.project.as_deref())
        .await?;
    let responses: Vec<TaskResponse> = tasks.into_iter().map(Into::into).collect();
    Ok(list_response(responses))
}

/// POST /api/v1/tasks - Create a task.
#[utoipa::path(
    post,
    path = "/api/v1/tasks",
    tag = "tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = TaskResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateTaskRequest>,
) -> Result<Response, ApiError> {
    let mut errors = FieldErrors::default();

    let priority = match parse_priority(req.priority) {
        Ok(priority) => Some(priority),
        Err(e) => {
            errors.add("priority", e.to_string());
            None
        }
    };
    let status = match req.status.as_deref() {
        Some(status) => parse_status(status).ok(),
        None => Some(TaskStatus::New),
    };
    let project_id = resolve_project(&state, &req.project, &mut errors).await?;
    check_tags(&state, &req.tags, &mut errors).await?;
    check_deadline(&req.deadline, &mut errors);
    errors.into_result()?;

    let (Some(priority), Some(status), Some(project_id)) = (priority, status, project_id) else {
        return Err(ApiError::bad_request("Invalid task"));
    };

    let new_task = NewTask::new(req.name, req.description, project_id, req.deadline)
        .with_priority(priority)
        .with_status(status)
        .with_tags(req.tags);
    let task = TaskRepository::new(state.db.pool()).create(&new_task).await?;

    tracing::info!(task_id = task.id, project_id = task.project_id, "Task created");
    Ok(created(TaskResponse::from(task)))
}

/// GET /api/v1/tasks/:id - Get a task.
#[utoipa::path(
    get,
    path = "/api/v1/tasks/{id}",
    tag = "tasks",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task", body = TaskResponse),
        (status = 404, description = "Task not found")
    )
)]
pub async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<TaskResponse>>, ApiError> {
    let task = TaskRepository::new(state.db.pool())
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Task not found"))?;

    Ok(Json(ApiResponse::new(task.into())))
}

/// PUT /api/v1/tasks/:id - Update a task.
///
/// Fields left out of the body keep their current value. A new deadline
/// must lie in the future.
#[utoipa::path(
    put,
    path = "/api/v1/tasks/{id}",
    tag = "tasks",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Task updated", body = TaskResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Task not found")
    )
)]
pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateTaskRequest>,
) -> Result<Json<ApiResponse<TaskResponse>>, ApiError> {
    let repo = TaskRepository::new(state.db.pool());
    if repo.get_by_id(id).await?.is_none() {
        return Err(ApiError::not_found("Task not found"));
    }

    let mut errors = FieldErrors::default();
    let mut update = TaskUpdate::new();

    if let Some(name) = req.name {
        update = update.name(name);
    }
    if let Some(description) = req.description {
        update = update.description(description);
    }
    if let Some(value) = req.priority {
        match parse_priority(value) {
            Ok(priority) => update = update.priority(priority),
            Err(e) => errors.add("priority", e.to_string()),
        }
    }
    if let Some(status) = req.status.as_deref().and_then(|s| parse_status(s).ok()) {
        update = update.status(status);
    }
    if let Some(ref project) = req.project {
        if let Some(project_id) = resolve_project(&state, project, &mut errors).await? {
            update = update.project_id(project_id);
        }
    }
    if let Some(tags) = req.tags {
        check_tags(&state, &tags, &mut errors).await?;
        update = update.tags(tags);
    }
    if let Some(deadline) = req.deadline {
        check_deadline(&deadline, &mut errors);
        update = update.deadline(deadline);
    }
    errors.into_result()?;

    let task = repo
        .update(id, &update)
        .await?
        .ok_or_else(|| ApiError::not_found("Task not found"))?;

    Ok(Json(ApiResponse::new(task.into())))
}

/// DELETE /api/v1/tasks/:id - Delete a task.
#[utoipa::path(
    delete,
    path = "/api/v1/tasks/{id}",
    tag = "tasks",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task deleted", body = MessageResponse),
        (status = 404, description = "Task not found")
    )
)]
pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !TaskRepository::new(state.db.pool()).delete(id).await? {
        return Err(ApiError::not_found("Task not found"));
    }

    Ok(Json(MessageResponse::new("Task deleted successfully")))
}
