//! OpenAPI document for the web API.

use utoipa::OpenApi;

use super::dto::{
    CreateProjectRequest, CreateTaskRequest, FileResponse, FileSummary, MessageResponse,
    ProjectDetailResponse, ProjectResponse, RegisterUserRequest, TagRequest, TagResponse,
    TaskResponse, UpdateProjectRequest, UpdateTaskRequest, UploadFileForm, UserDetailResponse,
    UserListItem,
};
use super::error::{ErrorBody, ErrorCode, ErrorDetail};
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "ProjectHub API", description = "Projects, tasks, files and users"),
    paths(
        handlers::project::list_projects,
        handlers::project::create_project,
        handlers::project::get_project,
        handlers::project::update_project,
        handlers::project::delete_project,
        handlers::file::list_files,
        handlers::file::upload_file,
        handlers::file::get_file,
        handlers::file::download_file,
        handlers::file::delete_file,
        handlers::task::list_tasks,
        handlers::task::create_task,
        handlers::task::get_task,
        handlers::task::update_task,
        handlers::task::delete_task,
        handlers::tag::list_tags,
        handlers::tag::create_tag,
        handlers::tag::get_tag,
        handlers::tag::update_tag,
        handlers::tag::delete_tag,
        handlers::user::list_users,
        handlers::user::register_user,
        handlers::user::get_user,
    ),
    components(schemas(
        CreateProjectRequest,
        UpdateProjectRequest,
        ProjectResponse,
        ProjectDetailResponse,
        FileSummary,
        FileResponse,
        UploadFileForm,
        TagRequest,
        TagResponse,
        CreateTaskRequest,
        UpdateTaskRequest,
        TaskResponse,
        RegisterUserRequest,
        UserListItem,
        UserDetailResponse,
        MessageResponse,
        ErrorBody,
        ErrorDetail,
        ErrorCode,
    )),
    tags(
        (name = "projects", description = "Project management"),
        (name = "files", description = "Project file storage"),
        (name = "tasks", description = "Task tracking"),
        (name = "tags", description = "Task tags"),
        (name = "users", description = "User registration"),
    )
)]
pub struct ApiDoc;
