//! API handlers for the ProjectHub web API.

pub mod file;
pub mod project;
pub mod tag;
pub mod task;
pub mod user;

pub use file::*;
pub use project::*;
pub use tag::*;
pub use task::*;
pub use user::*;

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::Serialize;

use crate::file::{FileStorage, ProjectFileService, DEFAULT_BASE_DIR, MAX_UPLOAD_SIZE};
use crate::web::dto::ApiResponse;
use crate::Database;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle.
    pub db: Database,
    /// Physical file storage.
    pub storage: FileStorage,
    /// Directory under the storage root that holds project folders.
    pub base_dir: String,
    /// Maximum accepted upload size in bytes.
    pub max_upload_size: u64,
}

impl AppState {
    /// Create a new application state with default file settings.
    pub fn new(db: Database, storage: FileStorage) -> Self {
        Self {
            db,
            storage,
            base_dir: DEFAULT_BASE_DIR.to_string(),
            max_upload_size: MAX_UPLOAD_SIZE,
        }
    }

    /// Set the base directory for project folders.
    pub fn with_base_dir(mut self, base_dir: impl Into<String>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Set the maximum upload size.
    pub fn with_max_upload_size(mut self, max_upload_size: u64) -> Self {
        self.max_upload_size = max_upload_size;
        self
    }

    /// File service bound to this state.
    pub fn file_service(&self) -> ProjectFileService<'_> {
        ProjectFileService::new(&self.db, &self.storage)
            .with_base_dir(self.base_dir.clone())
            .with_max_file_size(self.max_upload_size)
    }
}

/// Respond with `{"data": [...]}`, or 204 when the list is empty.
pub(crate) fn list_response<T: Serialize>(items: Vec<T>) -> Response {
    if items.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        Json(ApiResponse::new(items)).into_response()
    }
}

/// Respond with 201 and `{"data": item}`.
pub(crate) fn created<T: Serialize>(item: T) -> Response {
    (StatusCode::CREATED, Json(ApiResponse::new(item))).into_response()
}
