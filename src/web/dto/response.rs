//! Response DTOs for Web API.

use serde::Serialize;
use utoipa::ToSchema;

use crate::datetime::to_rfc3339;
use crate::file::ProjectFile;
use crate::project::Project;
use crate::task::{Tag, Task};
use crate::user::User;

// ============================================================================
// Generic Response Wrappers
// ============================================================================

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Plain confirmation message.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Message text.
    pub message: String,
}

impl MessageResponse {
    /// Create a new message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Projects and files
// ============================================================================

/// Project summary.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectResponse {
    /// Project ID.
    pub id: i64,
    /// Project name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Creation time (RFC 3339).
    pub created_at: String,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            created_at: to_rfc3339(&p.created_at),
        }
    }
}

/// Project detail with its linked files.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectDetailResponse {
    /// Project ID.
    pub id: i64,
    /// Project name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Creation time (RFC 3339).
    pub created_at: String,
    /// Number of linked files.
    pub count_of_files: i64,
    /// Linked files.
    pub files: Vec<FileSummary>,
}

impl ProjectDetailResponse {
    /// Build the detail view from a project and its files.
    pub fn new(project: Project, files: Vec<ProjectFile>) -> Self {
        Self {
            id: project.id,
            name: project.name,
            description: project.description,
            created_at: to_rfc3339(&project.created_at),
            count_of_files: files.len() as i64,
            files: files.into_iter().map(FileSummary::from).collect(),
        }
    }
}

/// File entry inside a project detail.
#[derive(Debug, Serialize, ToSchema)]
pub struct FileSummary {
    /// File ID.
    pub id: i64,
    /// Original file name.
    pub file_name: String,
    /// Relative storage path.
    pub file_path: String,
}

impl From<ProjectFile> for FileSummary {
    fn from(f: ProjectFile) -> Self {
        Self {
            id: f.id,
            file_name: f.file_name,
            file_path: f.file_path,
        }
    }
}

/// Stored file record.
#[derive(Debug, Serialize, ToSchema)]
pub struct FileResponse {
    /// File ID.
    pub id: i64,
    /// Original file name.
    pub file_name: String,
    /// Relative storage path.
    pub file_path: String,
    /// IDs of the projects the file is linked to.
    pub projects: Vec<i64>,
    /// Upload time (RFC 3339).
    pub created_at: String,
}

impl From<ProjectFile> for FileResponse {
    fn from(f: ProjectFile) -> Self {
        Self {
            id: f.id,
            file_name: f.file_name,
            file_path: f.file_path,
            projects: f.projects,
            created_at: to_rfc3339(&f.created_at),
        }
    }
}

// ============================================================================
// Tags and tasks
// ============================================================================

/// Tag.
#[derive(Debug, Serialize, ToSchema)]
pub struct TagResponse {
    /// Tag ID.
    pub id: i64,
    /// Tag name.
    pub name: String,
}

impl From<Tag> for TagResponse {
    fn from(t: Tag) -> Self {
        Self {
            id: t.id,
            name: t.name,
        }
    }
}

/// Task.
#[derive(Debug, Serialize, ToSchema)]
pub struct TaskResponse {
    /// Task ID.
    pub id: i64,
    /// Task name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Priority value (1-4).
    pub priority: i64,
    /// Priority label.
    pub priority_label: String,
    /// Status.
    pub status: String,
    /// Owning project name.
    pub project: String,
    /// Tag IDs.
    pub tags: Vec<i64>,
    /// Deadline (RFC 3339).
    pub deadline: String,
    /// Creation time (RFC 3339).
    pub created_at: String,
    /// Last update time (RFC 3339).
    pub updated_at: String,
}

impl From<Task> for TaskResponse {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            name: t.name,
            description: t.description,
            priority: t.priority.value(),
            priority_label: t.priority.label().to_string(),
            status: t.status.to_string(),
            project: t.project_name,
            tags: t.tags,
            deadline: to_rfc3339(&t.deadline),
            created_at: to_rfc3339(&t.created_at),
            updated_at: to_rfc3339(&t.updated_at),
        }
    }
}

// ============================================================================
// Users
// ============================================================================

/// User list entry.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserListItem {
    /// User ID.
    pub id: i64,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Job position.
    pub position: String,
}

impl From<User> for UserListItem {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            position: u.position.to_string(),
        }
    }
}

/// User detail. The password hash is never exposed.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserDetailResponse {
    /// User ID.
    pub id: i64,
    /// Login username.
    pub username: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Job position.
    pub position: String,
    /// Assigned project ID.
    pub project: Option<i64>,
}

impl From<User> for UserDetailResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            phone: u.phone,
            position: u.position.to_string(),
            project: u.project_id,
        }
    }
}
