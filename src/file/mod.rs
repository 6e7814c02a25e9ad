//! Project file module for ProjectHub.
//!
//! This module provides the upload path for project files:
//! - Extension, ASCII and size validation
//! - Deterministic storage paths from project and file names
//! - Physical storage under a configurable root
//! - File records linked to projects

mod metadata;
mod path;
mod service;
mod storage;
pub mod validation;

pub use metadata::{ProjectFile, ProjectFileRepository};
pub use path::{build_path, project_dir_name};
pub use service::{DownloadResult, ProjectFileService, UploadRequest};
pub use storage::FileStorage;
pub use validation::{
    is_allowed_extension, is_ascii, is_within_size_limit, validate_upload, FileValidationError,
};

/// Maximum upload size (2MB).
pub const MAX_UPLOAD_SIZE: u64 = 2 * 1024 * 1024;

/// Default base directory for stored files.
pub const DEFAULT_BASE_DIR: &str = "downloads";
