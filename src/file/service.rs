//! Project file service for ProjectHub.
//!
//! This module runs the upload path (validate, compute path, write,
//! record) and the reverse delete path.

use tracing::{info, warn};

use crate::db::Database;
use crate::project::ProjectRepository;
use crate::{HubError, Result};

use super::metadata::{ProjectFile, ProjectFileRepository};
use super::path::build_path;
use super::storage::FileStorage;
use super::validation::validate_upload_with_limit;
use super::{DEFAULT_BASE_DIR, MAX_UPLOAD_SIZE};

/// Request data for file upload.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Project to attach the file to.
    pub project_id: i64,
    /// Declared file name.
    pub file_name: String,
    /// File content.
    pub content: Vec<u8>,
}

impl UploadRequest {
    /// Create a new upload request.
    pub fn new(project_id: i64, file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            project_id,
            file_name: file_name.into(),
            content,
        }
    }
}

/// Result of a file download.
#[derive(Debug)]
pub struct DownloadResult {
    /// File record.
    pub file: ProjectFile,
    /// File content.
    pub content: Vec<u8>,
}

/// Service for uploading, downloading and deleting project files.
pub struct ProjectFileService<'a> {
    db: &'a Database,
    storage: &'a FileStorage,
    base_dir: String,
    max_file_size: u64,
}

impl<'a> ProjectFileService<'a> {
    /// Create a new ProjectFileService using the default base directory and size limit.
    pub fn new(db: &'a Database, storage: &'a FileStorage) -> Self {
        Self {
            db,
            storage,
            base_dir: DEFAULT_BASE_DIR.to_string(),
            max_file_size: MAX_UPLOAD_SIZE,
        }
    }

    /// Set the base directory that prefixes stored paths.
    pub fn with_base_dir(mut self, base_dir: impl Into<String>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Set a custom max file size.
    pub fn with_max_file_size(mut self, max_size: u64) -> Self {
        self.max_file_size = max_size;
        self
    }

    /// Upload a file to a project.
    ///
    /// The file is written before its record. If recording fails, a file
    /// that did not exist before this call is removed again and the
    /// original error is returned.
    pub async fn upload(&self, request: &UploadRequest) -> Result<ProjectFile> {
        let project = ProjectRepository::new(self.db.pool())
            .get_by_id(request.project_id)
            .await?
            .ok_or_else(|| HubError::NotFound("project".to_string()))?;

        validate_upload_with_limit(
            &request.file_name,
            request.content.len() as u64,
            self.max_file_size,
        )?;

        let file_path = build_path(&self.base_dir, &project.name, &request.file_name)?;

        let existed = self.storage.exists(&file_path);
        self.storage.save(&file_path, &request.content)?;

        let repo = ProjectFileRepository::new(self.db.pool());
        match repo
            .record(project.id, &request.file_name, &file_path)
            .await
        {
            Ok(file) => {
                info!(
                    file_id = file.id,
                    project_id = project.id,
                    path = %file_path,
                    size = request.content.len(),
                    "File uploaded"
                );
                Ok(file)
            }
            Err(e) => {
                if !existed {
                    match self.storage.delete(&file_path) {
                        Ok(()) => info!(path = %file_path, "Removed file after failed record"),
                        Err(cleanup) => warn!(
                            path = %file_path,
                            error = %cleanup,
                            "Failed to remove file after failed record"
                        ),
                    }
                }
                Err(e)
            }
        }
    }

    /// Get a file record by ID.
    pub async fn get(&self, file_id: i64) -> Result<ProjectFile> {
        ProjectFileRepository::new(self.db.pool())
            .get_by_id(file_id)
            .await?
            .ok_or_else(|| HubError::NotFound("file".to_string()))
    }

    /// List file records, optionally restricted to a project name.
    pub async fn list(&self, project_name: Option<&str>) -> Result<Vec<ProjectFile>> {
        ProjectFileRepository::new(self.db.pool())
            .list(project_name)
            .await
    }

    /// Read a stored file together with its record.
    pub async fn download(&self, file_id: i64) -> Result<DownloadResult> {
        let file = self.get(file_id).await?;
        let content = self.storage.load(&file.file_path)?;
        Ok(DownloadResult { file, content })
    }

    /// Delete a file: the physical file first, then its record.
    ///
    /// When the physical file is already gone the record is still removed
    /// and [`HubError::FileMissing`] is returned. Any other I/O failure
    /// leaves the record in place.
    pub async fn delete(&self, file_id: i64) -> Result<()> {
        let file = self.get(file_id).await?;
        let repo = ProjectFileRepository::new(self.db.pool());

        match self.storage.delete(&file.file_path) {
            Ok(()) => {
                repo.delete(file.id).await?;
                info!(file_id = file.id, path = %file.file_path, "File deleted");
                Ok(())
            }
            Err(HubError::FileMissing(path)) => {
                repo.delete(file.id).await?;
                warn!(file_id = file.id, path = %path, "Deleted record of missing file");
                Err(HubError::FileMissing(path))
            }
            Err(e) => Err(e),
        }
    }

    /// Delete a project together with the files stored only for it.
    ///
    /// Returns `false` if the project does not exist. Records go in one
    /// transaction with the project; the physical files are removed
    /// afterwards and a file already gone from disk is only logged.
    pub async fn delete_project(&self, project_id: i64) -> Result<bool> {
        let Some(paths) = ProjectRepository::new(self.db.pool())
            .delete(project_id)
            .await?
        else {
            return Ok(false);
        };

        for path in &paths {
            match self.storage.delete(path) {
                Ok(()) => info!(project_id, path = %path, "File deleted with project"),
                Err(e) => warn!(
                    project_id,
                    path = %path,
                    error = %e,
                    "Failed to remove file of deleted project"
                ),
            }
        }

        Ok(true)
    }
}
