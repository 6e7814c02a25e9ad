//! Project handlers.

use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};
use std::sync::Arc;

use super::{created, list_response, AppState};
use crate::file::ProjectFileRepository;
use crate::project::{NewProject, ProjectRepository, ProjectUpdate};
use crate::web::dto::{
    ApiResponse, CreateProjectRequest, MessageResponse, ProjectDetailResponse, ProjectResponse,
    UpdateProjectRequest, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::HubError;

/// GET /api/v1/projects - List all projects.
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    tag = "projects",
    responses(
        (status = 200, description = "List of projects", body = Vec<ProjectResponse>),
        (status = 204, description = "No projects")
    )
)]
pub async fn list_projects(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let projects = ProjectRepository::new(state.db.pool()).list().await?;
    let responses: Vec<ProjectResponse> = projects.into_iter().map(Into::into).collect();
    Ok(list_response(responses))
}

/// POST /api/v1/projects - Create a project.
#[utoipa::path(
    post,
    path = "/api/v1/projects",
    tag = "projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Project name already taken")
    )
)]
pub async fn create_project(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateProjectRequest>,
) -> Result<Response, ApiError> {
    let project = ProjectRepository::new(state.db.pool())
        .create(&NewProject::new(req.name, req.description))
        .await?;

    tracing::info!(project_id = project.id, name = %project.name, "Project created");
    Ok(created(ProjectResponse::from(project)))
}

/// GET /api/v1/projects/:id - Get project details with its files.
#[utoipa::path(
    get,
    path = "/api/v1/projects/{id}",
    tag = "projects",
    params(
        ("id" = i64, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project details", body = ProjectDetailResponse),
        (status = 404, description = "Project not found")
    )
)]
pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ProjectDetailResponse>>, ApiError> {
    let project = ProjectRepository::new(state.db.pool())
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Project not found"))?;

    let files = ProjectFileRepository::new(state.db.pool())
        .list_by_project(project.id)
        .await?;

    Ok(Json(ApiResponse::new(ProjectDetailResponse::new(
        project, files,
    ))))
}

/// PUT /api/v1/projects/:id - Update a project.
///
/// Fields left out of the body keep their current value. A project with
/// stored files keeps its storage directory, so it can not be renamed.
#[utoipa::path(
    put,
    path = "/api/v1/projects/{id}",
    tag = "projects",
    params(
        ("id" = i64, Path, description = "Project ID")
    ),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Project updated", body = ProjectResponse),
        (status = 400, description = "Invalid input or renaming a project with stored files"),
        (status = 404, description = "Project not found"),
        (status = 409, description = "Project name already taken")
    )
)]
pub async fn update_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateProjectRequest>,
) -> Result<Json<ApiResponse<ProjectResponse>>, ApiError> {
    let mut update = ProjectUpdate::new();
    if let Some(name) = req.name {
        update = update.name(name);
    }
    if let Some(description) = req.description {
        update = update.description(description);
    }

    let project = ProjectRepository::new(state.db.pool())
        .update(id, &update)
        .await
        .map_err(|e| match e {
            HubError::Validation(msg) => ApiError::field("name", msg),
            other => other.into(),
        })?
        .ok_or_else(|| ApiError::not_found("Project not found"))?;

    Ok(Json(ApiResponse::new(project.into())))
}

/// DELETE /api/v1/projects/:id - Delete a project.
///
/// Tasks and file links go with the project, and so do files that are not
/// linked to any other project.
#[utoipa::path(
    delete,
    path = "/api/v1/projects/{id}",
    tag = "projects",
    params(
        ("id" = i64, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project deleted", body = MessageResponse),
        (status = 404, description = "Project not found")
    )
)]
pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.file_service().delete_project(id).await? {
        return Err(ApiError::not_found("Project not found"));
    }

    tracing::info!(project_id = id, "Project deleted");
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}
