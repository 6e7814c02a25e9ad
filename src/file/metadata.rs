//! Stored file records for ProjectHub.
//!
//! A `project_files` row describes one physical file. Rows are linked to
//! projects through `project_file_links`.

use sqlx::SqlitePool;

use crate::{HubError, Result};

/// Metadata for a stored project file.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ProjectFile {
    /// Unique file ID.
    pub id: i64,
    /// File name as declared by the uploader.
    pub file_name: String,
    /// Storage-relative path of the physical file.
    pub file_path: String,
    /// When the record was created.
    pub created_at: String,
    /// IDs of the projects this file is linked to.
    #[sqlx(skip)]
    pub projects: Vec<i64>,
}

/// Repository for project file records.
pub struct ProjectFileRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProjectFileRepository<'a> {
    /// Create a new ProjectFileRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a stored file for a project.
    ///
    /// If a row with the same `file_path` already exists it is linked to the
    /// project and returned. Otherwise a new row and its link are inserted.
    /// Both happen inside one transaction.
    pub async fn record(&self, project_id: i64, file_name: &str, file_path: &str) -> Result<ProjectFile> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM project_files WHERE file_path = ?")
                .bind(file_path)
                .fetch_optional(&mut *tx)
                .await?;

        let file_id = match existing {
            Some((id,)) => id,
            None => sqlx::query("INSERT INTO project_files (file_name, file_path) VALUES (?, ?)")
                .bind(file_name)
                .bind(file_path)
                .execute(&mut *tx)
                .await?
                .last_insert_rowid(),
        };

        sqlx::query("INSERT OR IGNORE INTO project_file_links (project_id, file_id) VALUES (?, ?)")
            .bind(project_id)
            .bind(file_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        self.get_by_id(file_id)
            .await?
            .ok_or_else(|| HubError::NotFound("file".to_string()))
    }

    /// Get a file record by ID, including its project links.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<ProjectFile>> {
        let file = sqlx::query_as::<_, ProjectFile>(
            "SELECT id, file_name, file_path, created_at FROM project_files WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        match file {
            Some(mut file) => {
                file.projects = self.project_ids(file.id).await?;
                Ok(Some(file))
            }
            None => Ok(None),
        }
    }

    /// List file records, optionally restricted to projects with the given name.
    pub async fn list(&self, project_name: Option<&str>) -> Result<Vec<ProjectFile>> {
        let files = match project_name {
            Some(name) => {
                sqlx::query_as::<_, ProjectFile>(
                    "SELECT f.id, f.file_name, f.file_path, f.created_at
                     FROM project_files f
                     JOIN project_file_links l ON l.file_id = f.id
                     JOIN projects p ON p.id = l.project_id
                     WHERE p.name = ?
                     ORDER BY f.id",
                )
                .bind(name)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ProjectFile>(
                    "SELECT id, file_name, file_path, created_at FROM project_files ORDER BY id",
                )
                .fetch_all(self.pool)
                .await?
            }
        };

        self.with_projects(files).await
    }

    /// List file records linked to a project.
    pub async fn list_by_project(&self, project_id: i64) -> Result<Vec<ProjectFile>> {
        let files = sqlx::query_as::<_, ProjectFile>(
            "SELECT f.id, f.file_name, f.file_path, f.created_at
             FROM project_files f
             JOIN project_file_links l ON l.file_id = f.id
             WHERE l.project_id = ?
             ORDER BY f.id",
        )
        .bind(project_id)
        .fetch_all(self.pool)
        .await?;

        self.with_projects(files).await
    }

    /// Delete a file record by ID. Its project links are removed with it.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM project_files WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Get the IDs of the projects a file is linked to.
    async fn project_ids(&self, file_id: i64) -> Result<Vec<i64>> {
        let ids: Vec<(i64,)> = sqlx::query_as(
            "SELECT project_id FROM project_file_links WHERE file_id = ? ORDER BY project_id",
        )
        .bind(file_id)
        .fetch_all(self.pool)
        .await?;

        Ok(ids.into_iter().map(|(id,)| id).collect())
    }

    async fn with_projects(&self, mut files: Vec<ProjectFile>) -> Result<Vec<ProjectFile>> {
        for file in &mut files {
            file.projects = self.project_ids(file.id).await?;
        }
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{NewProject, ProjectRepository};
    use crate::Database;

    async fn setup() -> (Database, i64) {
        let db = Database::open_in_memory().await.unwrap();
        let project = ProjectRepository::new(db.pool())
            .create(&NewProject::new("Acme Inc", "Widgets"))
            .await
            .unwrap();
        (db, project.id)
    }

    #[tokio::test]
    async fn test_record_new_file() {
        let (db, project_id) = setup().await;
        let repo = ProjectFileRepository::new(db.pool());

        let file = repo
            .record(project_id, "data.csv", "downloads/Acme_Inc/data.csv")
            .await
            .unwrap();

        assert!(file.id > 0);
        assert_eq!(file.file_name, "data.csv");
        assert_eq!(file.file_path, "downloads/Acme_Inc/data.csv");
        assert_eq!(file.projects, vec![project_id]);
    }

    #[tokio::test]
    async fn test_record_same_path_is_idempotent() {
        let (db, project_id) = setup().await;
        let repo = ProjectFileRepository::new(db.pool());

        let first = repo
            .record(project_id, "data.csv", "downloads/Acme_Inc/data.csv")
            .await
            .unwrap();
        let second = repo
            .record(project_id, "data.csv", "downloads/Acme_Inc/data.csv")
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.projects, vec![project_id]);
        assert_eq!(repo.list(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_record_links_second_project() {
        let (db, project_id) = setup().await;
        let other = ProjectRepository::new(db.pool())
            .create(&NewProject::new("Other", "x"))
            .await
            .unwrap();
        let repo = ProjectFileRepository::new(db.pool());

        let file = repo
            .record(project_id, "a.pdf", "downloads/Acme_Inc/a.pdf")
            .await
            .unwrap();
        let linked = repo
            .record(other.id, "a.pdf", "downloads/Acme_Inc/a.pdf")
            .await
            .unwrap();

        assert_eq!(file.id, linked.id);
        assert_eq!(linked.projects, vec![project_id, other.id]);
    }

    #[tokio::test]
    async fn test_record_unknown_project_rolls_back() {
        let (db, _) = setup().await;
        let repo = ProjectFileRepository::new(db.pool());

        let result = repo.record(999, "a.pdf", "downloads/X/a.pdf").await;
        assert!(matches!(result, Err(HubError::Database(_))));
        assert!(repo.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_filtered_by_project_name() {
        let (db, project_id) = setup().await;
        let other = ProjectRepository::new(db.pool())
            .create(&NewProject::new("Other", "x"))
            .await
            .unwrap();
        let repo = ProjectFileRepository::new(db.pool());

        repo.record(project_id, "a.pdf", "downloads/Acme_Inc/a.pdf")
            .await
            .unwrap();
        repo.record(other.id, "b.pdf", "downloads/Other/b.pdf")
            .await
            .unwrap();

        let acme = repo.list(Some("Acme Inc")).await.unwrap();
        assert_eq!(acme.len(), 1);
        assert_eq!(acme[0].file_name, "a.pdf");

        assert_eq!(repo.list(None).await.unwrap().len(), 2);
        assert!(repo.list(Some("Nobody")).await.unwrap().is_empty());
        assert_eq!(repo.list_by_project(other.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_links() {
        let (db, project_id) = setup().await;
        let repo = ProjectFileRepository::new(db.pool());

        let file = repo
            .record(project_id, "a.pdf", "downloads/Acme_Inc/a.pdf")
            .await
            .unwrap();

        assert!(repo.delete(file.id).await.unwrap());
        assert!(!repo.delete(file.id).await.unwrap());
        assert!(repo.get_by_id(file.id).await.unwrap().is_none());
        assert!(repo.list_by_project(project_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_project_delete_removes_unshared_file_row() {
        let (db, project_id) = setup().await;
        let repo = ProjectFileRepository::new(db.pool());

        let file = repo
            .record(project_id, "a.pdf", "downloads/Acme_Inc/a.pdf")
            .await
            .unwrap();
        ProjectRepository::new(db.pool())
            .delete(project_id)
            .await
            .unwrap();

        assert!(repo.get_by_id(file.id).await.unwrap().is_none());
    }
}
