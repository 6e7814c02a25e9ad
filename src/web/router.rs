//! Router configuration for Web API.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    create_project, create_tag, create_task, delete_file, delete_project, delete_tag,
    delete_task, download_file, get_file, get_project, get_tag, get_task, get_user, list_files,
    list_projects, list_tags, list_tasks, list_users, register_user, update_project, update_tag,
    update_task, upload_file, AppState,
};
use super::middleware::create_cors_layer;
use super::openapi::ApiDoc;

/// Create the main API router.
///
/// `body_limit` caps request bodies in bytes. It must be larger than the
/// upload limit so that oversized files reach the upload validator.
pub fn create_router(
    app_state: Arc<AppState>,
    cors_origins: &[String],
    body_limit: usize,
) -> Router {
    let project_routes = Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route("/projects/files", get(list_files).post(upload_file))
        .route("/projects/files/:id", get(get_file).delete(delete_file))
        .route("/projects/files/:id/download", get(download_file))
        .route(
            "/projects/:id",
            get(get_project).put(update_project).delete(delete_project),
        );

    let task_routes = Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/tags", get(list_tags).post(create_tag))
        .route(
            "/tasks/tags/:id",
            get(get_tag).put(update_tag).delete(delete_tag),
        )
        .route(
            "/tasks/:id",
            get(get_task).put(update_task).delete(delete_task),
        );

    let user_routes = Router::new()
        .route("/users", get(list_users))
        .route("/users/register", post(register_user))
        .route("/users/:username", get(get_user));

    let api_routes = Router::new()
        .merge(project_routes)
        .merge(task_routes)
        .merge(user_routes);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(app_state)
        .merge(create_health_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
