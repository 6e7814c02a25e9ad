//! Request DTOs for Web API.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::validation::{
    valid_description, valid_email, valid_first_name, valid_last_name, valid_password,
    valid_phone, valid_position, valid_project_name, valid_status, valid_tag_name,
    valid_task_description, valid_task_name, valid_username,
};

// ============================================================================
// Projects
// ============================================================================

/// Create project request.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProjectRequest {
    /// Unique project name.
    #[validate(custom(function = "valid_project_name"))]
    pub name: String,
    /// Project description.
    #[validate(custom(function = "valid_description"))]
    pub description: String,
}

/// Update project request. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProjectRequest {
    /// New project name.
    #[validate(custom(function = "valid_project_name"))]
    pub name: Option<String>,
    /// New description.
    #[validate(custom(function = "valid_description"))]
    pub description: Option<String>,
}

/// Query parameters for the file list.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FileListQuery {
    /// Only list files linked to the project with this name.
    pub project_name: Option<String>,
}

/// Multipart form of a file upload, for the API documentation.
#[derive(Debug, ToSchema)]
pub struct UploadFileForm {
    /// File content. Allowed extensions: csv, doc, pdf, xlsx.
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// ID of the project the file belongs to.
    pub project_id: i64,
}

// ============================================================================
// Tags and tasks
// ============================================================================

/// Create or rename tag request.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TagRequest {
    /// Tag name (4-20 letters or spaces).
    #[validate(custom(function = "valid_tag_name"))]
    pub name: String,
}

/// Create task request.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTaskRequest {
    /// Task name.
    #[validate(custom(function = "valid_task_name"))]
    pub name: String,
    /// Task description.
    #[validate(custom(function = "valid_task_description"))]
    pub description: String,
    /// Priority: 1 Low, 2 Medium, 3 High, 4 Critical.
    pub priority: i64,
    /// Status, `new` when omitted.
    #[validate(custom(function = "valid_status"))]
    pub status: Option<String>,
    /// Name of the owning project.
    pub project: String,
    /// Tag IDs.
    #[serde(default)]
    pub tags: Vec<i64>,
    /// Deadline (RFC 3339), must be in the future.
    pub deadline: DateTime<Utc>,
}

/// Update task request. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTaskRequest {
    /// New task name.
    #[validate(custom(function = "valid_task_name"))]
    pub name: Option<String>,
    /// New description.
    #[validate(custom(function = "valid_task_description"))]
    pub description: Option<String>,
    /// New priority.
    pub priority: Option<i64>,
    /// New status.
    #[validate(custom(function = "valid_status"))]
    pub status: Option<String>,
    /// New owning project name.
    pub project: Option<String>,
    /// Replacement tag IDs.
    pub tags: Option<Vec<i64>>,
    /// New deadline.
    pub deadline: Option<DateTime<Utc>>,
}

/// Query parameters for the task list.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TaskListQuery {
    /// Only list tasks of the project with this name.
    pub project: Option<String>,
}

// ============================================================================
// Users
// ============================================================================

/// User registration request.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterUserRequest {
    /// Login username.
    #[validate(custom(function = "valid_username"))]
    pub username: String,
    /// First name.
    #[validate(custom(function = "valid_first_name"))]
    pub first_name: String,
    /// Last name.
    #[validate(custom(function = "valid_last_name"))]
    pub last_name: String,
    /// Email address.
    #[validate(custom(function = "valid_email"))]
    pub email: String,
    /// Phone number.
    #[validate(custom(function = "valid_phone"))]
    pub phone: Option<String>,
    /// Job position.
    #[validate(custom(function = "valid_position"))]
    pub position: String,
    /// Assigned project ID.
    pub project: Option<i64>,
    /// Password.
    #[validate(
        custom(function = "valid_password"),
        must_match(other = "re_password", message = "Password must be same.")
    )]
    pub password: String,
    /// Password confirmation.
    pub re_password: String,
}
