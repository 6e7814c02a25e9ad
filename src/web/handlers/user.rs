//! User handlers.

use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;

use super::{created, list_response, AppState};
use crate::project::ProjectRepository;
use crate::user::validation::parse_position;
use crate::user::{hash_password, NewUser, UserRepository};
use crate::web::dto::{
    ApiResponse, RegisterUserRequest, UserDetailResponse, UserListItem, ValidatedJson,
};
use crate::web::error::ApiError;

/// GET /api/v1/users - List users.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    responses(
        (status = 200, description = "List of users", body = Vec<UserListItem>),
        (status = 204, description = "No users")
    )
)]
pub async fn list_users(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let users = UserRepository::new(state.db.pool()).list().await?;
    let responses: Vec<UserListItem> = users.into_iter().map(Into::into).collect();
    Ok(list_response(responses))
}

/// POST /api/v1/users/register - Register a new user.
#[utoipa::path(
    post,
    path = "/api/v1/users/register",
    tag = "users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = UserDetailResponse),
        (status = 400, description = "Invalid input or username/email taken")
    )
)]
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<RegisterUserRequest>,
) -> Result<Response, ApiError> {
    let repo = UserRepository::new(state.db.pool());
    let mut details: HashMap<String, Vec<String>> = HashMap::new();

    if repo.username_exists(&req.username).await? {
        details.insert(
            "username".to_string(),
            vec!["A user with that username already exists.".to_string()],
        );
    }
    if repo.email_exists(&req.email).await? {
        details.insert(
            "email".to_string(),
            vec!["A user with that email already exists.".to_string()],
        );
    }
    if let Some(project_id) = req.project {
        let project = ProjectRepository::new(state.db.pool())
            .get_by_id(project_id)
            .await?;
        if project.is_none() {
            details.insert(
                "project".to_string(),
                vec![format!("Invalid pk \"{}\" - object does not exist.", project_id)],
            );
        }
    }
    if !details.is_empty() {
        return Err(ApiError::validation(details));
    }

    let position = parse_position(&req.position)
        .map_err(|e| ApiError::field("position", e.to_string()))?;
    let password_hash = hash_password(&req.password).map_err(|e| {
        tracing::error!("Failed to hash password: {}", e);
        ApiError::internal("Failed to register user")
    })?;

    let mut new_user = NewUser::new(
        req.username,
        req.first_name,
        req.last_name,
        req.email,
        position,
        password_hash,
    );
    if let Some(phone) = req.phone {
        new_user = new_user.with_phone(phone);
    }
    if let Some(project_id) = req.project {
        new_user = new_user.with_project(project_id);
    }

    let user = repo.create(&new_user).await?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");
    Ok(created(UserDetailResponse::from(user)))
}

/// GET /api/v1/users/:username - Get a user by username.
#[utoipa::path(
    get,
    path = "/api/v1/users/{username}",
    tag = "users",
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 200, description = "User details", body = UserDetailResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<UserDetailResponse>>, ApiError> {
    let user = UserRepository::new(state.db.pool())
        .get_by_username(&username)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} does not exist", username)))?;

    Ok(Json(ApiResponse::new(user.into())))
}
