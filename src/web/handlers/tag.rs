//! Tag handlers.

use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};
use std::sync::Arc;

use super::{created, list_response, AppState};
use crate::task::TagRepository;
use crate::web::dto::{ApiResponse, MessageResponse, TagRequest, TagResponse, ValidatedJson};
use crate::web::error::ApiError;

/// GET /api/v1/tasks/tags - List tags.
#[utoipa::path(
    get,
    path = "/api/v1/tasks/tags",
    tag = "tags",
    responses(
        (status = 200, description = "List of tags", body = Vec<TagResponse>),
        (status = 204, description = "No tags")
    )
)]
pub async fn list_tags(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let tags = TagRepository::new(state.db.pool()).list().await?;
    let responses: Vec<TagResponse> = tags.into_iter().map(Into::into).collect();
    Ok(list_response(responses))
}

/// POST /api/v1/tasks/tags - Create a tag.
#[utoipa::path(
    post,
    path = "/api/v1/tasks/tags",
    tag = "tags",
    request_body = TagRequest,
    responses(
        (status = 201, description = "Tag created", body = TagResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Tag name already taken")
    )
)]
pub async fn create_tag(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<TagRequest>,
) -> Result<Response, ApiError> {
    let tag = TagRepository::new(state.db.pool()).create(&req.name).await?;
    Ok(created(TagResponse::from(tag)))
}

/// GET /api/v1/tasks/tags/:id - Get a tag.
#[utoipa::path(
    get,
    path = "/api/v1/tasks/tags/{id}",
    tag = "tags",
    params(
        ("id" = i64, Path, description = "Tag ID")
    ),
    responses(
        (status = 200, description = "Tag", body = TagResponse),
        (status = 404, description = "Tag not found")
    )
)]
pub async fn get_tag(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<TagResponse>>, ApiError> {
    let tag = TagRepository::new(state.db.pool())
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Tag not found"))?;

    Ok(Json(ApiResponse::new(tag.into())))
}

/// PUT /api/v1/tasks/tags/:id - Rename a tag.
#[utoipa::path(
    put,
    path = "/api/v1/tasks/tags/{id}",
    tag = "tags",
    params(
        ("id" = i64, Path, description = "Tag ID")
    ),
    request_body = TagRequest,
    responses(
        (status = 200, description = "Tag updated", body = TagResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Tag not found"),
        (status = 409, description = "Tag name already taken")
    )
)]
pub async fn update_tag(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<TagRequest>,
) -> Result<Json<ApiResponse<TagResponse>>, ApiError> {
    let tag = TagRepository::new(state.db.pool())
        .update(id, &req.name)
        .await?
        .ok_or_else(|| ApiError::not_found("Tag not found"))?;

    Ok(Json(ApiResponse::new(tag.into())))
}

/// DELETE /api/v1/tasks/tags/:id - Delete a tag.
#[utoipa::path(
    delete,
    path = "/api/v1/tasks/tags/{id}",
    tag = "tags",
    params(
        ("id" = i64, Path, description = "Tag ID")
    ),
    responses(
        (status = 200, description = "Tag deleted", body = MessageResponse),
        (status = 404, description = "Tag not found")
    )
)]
pub async fn delete_tag(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !TagRepository::new(state.db.pool()).delete(id).await? {
        return Err(ApiError::not_found("Tag not found"));
    }

    Ok(Json(MessageResponse::new("Successfully deleted")))
}
