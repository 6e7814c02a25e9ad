//! Project repository for ProjectHub.

use sqlx::{QueryBuilder, SqlitePool};

use super::types::{NewProject, Project, ProjectUpdate};
use crate::db::is_unique_violation;
use crate::file::project_dir_name;
use crate::{HubError, Result};

/// Repository for project CRUD operations.
pub struct ProjectRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProjectRepository<'a> {
    /// Create a new ProjectRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new project.
    ///
    /// Returns [`HubError::Conflict`] if the name is already taken.
    pub async fn create(&self, project: &NewProject) -> Result<Project> {
        let result = sqlx::query("INSERT INTO projects (name, description) VALUES (?, ?)")
            .bind(&project.name)
            .bind(&project.description)
            .execute(self.pool)
            .await
            .map_err(|e| map_name_conflict(e, &project.name))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| HubError::NotFound("project".to_string()))
    }

    /// Get a project by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Project>> {
        let project = sqlx::query_as::<_, Project>(
            "SELECT id, name, description, created_at FROM projects WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(project)
    }

    /// Get a project by its exact name.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Project>> {
        let project = sqlx::query_as::<_, Project>(
            "SELECT id, name, description, created_at FROM projects WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(project)
    }

    /// List all projects ordered by name.
    pub async fn list(&self) -> Result<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT id, name, description, created_at FROM projects ORDER BY name, id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(projects)
    }

    /// Update a project.
    ///
    /// Returns `Ok(None)` if the project does not exist. A project with
    /// linked files can not be renamed to a name that maps to another
    /// storage directory, since stored paths are built from the project
    /// name.
    pub async fn update(&self, id: i64, update: &ProjectUpdate) -> Result<Option<Project>> {
        if update.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut tx = self.pool.begin().await?;

        let current: Option<(String,)> = sqlx::query_as("SELECT name FROM projects WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some((current_name,)) = current else {
            return Ok(None);
        };

        if let Some(ref name) = update.name {
            if project_dir_name(name) != project_dir_name(&current_name) {
                let (linked,): (i64,) = sqlx::query_as(
                    "SELECT COUNT(*) FROM project_file_links WHERE project_id = ?",
                )
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
                if linked > 0 {
                    return Err(HubError::Validation(
                        "Project with stored files can not be renamed.".to_string(),
                    ));
                }
            }
        }

        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE projects SET ");
        let mut separated = query.separated(", ");

        if let Some(ref name) = update.name {
            separated.push("name = ");
            separated.push_bind_unseparated(name.clone());
        }

        if let Some(ref description) = update.description {
            separated.push("description = ");
            separated.push_bind_unseparated(description.clone());
        }

        query.push(" WHERE id = ");
        query.push_bind(id);

        query.build().execute(&mut *tx).await.map_err(|e| {
            map_name_conflict(e, update.name.as_deref().unwrap_or_default())
        })?;

        tx.commit().await?;

        self.get_by_id(id).await
    }

    /// Delete a project by ID.
    ///
    /// Tasks and file links are removed with the project, and so are file
    /// records that were linked to this project only. Returns `Ok(None)`
    /// if the project does not exist, otherwise the storage paths of the
    /// removed file records.
    pub async fn delete(&self, id: i64) -> Result<Option<Vec<String>>> {
        let mut tx = self.pool.begin().await?;

        let orphans: Vec<(i64, String)> = sqlx::query_as(
            "SELECT f.id, f.file_path
             FROM project_files f
             JOIN project_file_links l ON l.file_id = f.id
             WHERE l.project_id = ?
               AND NOT EXISTS (
                   SELECT 1 FROM project_file_links o
                   WHERE o.file_id = f.id AND o.project_id <> ?
               )
             ORDER BY f.id",
        )
        .bind(id)
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }

        for (file_id, _) in &orphans {
            sqlx::query("DELETE FROM project_files WHERE id = ?")
                .bind(file_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(Some(orphans.into_iter().map(|(_, path)| path).collect()))
    }
}

fn map_name_conflict(e: sqlx::Error, name: &str) -> HubError {
    if is_unique_violation(&e) {
        HubError::Conflict(format!("project with name '{name}' already exists"))
    } else {
        HubError::Database(e.to_string())
    }
}
