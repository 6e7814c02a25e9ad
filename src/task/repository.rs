//! Task repository for ProjectHub.

use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

use super::types::{NewTask, Task, TaskUpdate};
use crate::datetime::to_db_string;
use crate::{HubError, Result};

const TASK_COLUMNS: &str = "t.id, t.name, t.description, t.priority, t.status, t.project_id,
     p.name AS project_name, t.deadline, t.created_at, t.updated_at";

/// Repository for task CRUD operations.
pub struct TaskRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TaskRepository<'a> {
    /// Create a new TaskRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new task together with its tag links.
    pub async fn create(&self, task: &NewTask) -> Result<Task> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query(
            "INSERT INTO tasks (name, description, priority, status, project_id, deadline)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&task.name)
        .bind(&task.description)
        .bind(task.priority.value())
        .bind(task.status.as_str())
        .bind(task.project_id)
        .bind(to_db_string(&task.deadline))
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        replace_tags(&mut tx, id, &task.tags).await?;
        tx.commit().await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| HubError::NotFound("task".to_string()))
    }

    /// Get a task by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        let query = format!(
            "SELECT {TASK_COLUMNS} FROM tasks t JOIN projects p ON p.id = t.project_id
             WHERE t.id = ?"
        );
        let task = sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        match task {
            Some(mut task) => {
                task.tags = self.tag_ids(task.id).await?;
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    /// List tasks ordered by deadline, optionally restricted to a project name.
    pub async fn list(&self, project_name: Option<&str>) -> Result<Vec<Task>> {
        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {TASK_COLUMNS} FROM tasks t JOIN projects p ON p.id = t.project_id"
        ));
        if let Some(name) = project_name {
            query.push(" WHERE p.name = ");
            query.push_bind(name);
        }
        query.push(" ORDER BY t.deadline, t.id");

        let mut tasks = query
            .build_query_as::<Task>()
            .fetch_all(self.pool)
            .await?;

        for task in &mut tasks {
            task.tags = self.tag_ids(task.id).await?;
        }
        Ok(tasks)
    }

    /// Update a task.
    ///
    /// Only fields that are set in the update will be modified. A set tag
    /// list replaces the current tags. Returns `Ok(None)` if the task does
    /// not exist.
    pub async fn update(&self, id: i64, update: &TaskUpdate) -> Result<Option<Task>> {
        if update.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut tx = self.pool.begin().await?;

        let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Ok(None);
        }

        if update.has_row_changes() {
            let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE tasks SET ");
            let mut separated = query.separated(", ");

            if let Some(ref name) = update.name {
                separated.push("name = ");
                separated.push_bind_unseparated(name.clone());
            }
            if let Some(ref description) = update.description {
                separated.push("description = ");
                separated.push_bind_unseparated(description.clone());
            }
            if let Some(priority) = update.priority {
                separated.push("priority = ");
                separated.push_bind_unseparated(priority.value());
            }
            if let Some(status) = update.status {
                separated.push("status = ");
                separated.push_bind_unseparated(status.as_str());
            }
            if let Some(project_id) = update.project_id {
                separated.push("project_id = ");
                separated.push_bind_unseparated(project_id);
            }
            if let Some(ref deadline) = update.deadline {
                separated.push("deadline = ");
                separated.push_bind_unseparated(to_db_string(deadline));
            }
            separated.push("updated_at = datetime('now')");

            query.push(" WHERE id = ");
            query.push_bind(id);
            query.build().execute(&mut *tx).await?;
        }

        if let Some(ref tags) = update.tags {
            replace_tags(&mut tx, id, tags).await?;
        }

        tx.commit().await?;
        self.get_by_id(id).await
    }

    /// Delete a task by ID.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn tag_ids(&self, task_id: i64) -> Result<Vec<i64>> {
        let ids: Vec<(i64,)> =
            sqlx::query_as("SELECT tag_id FROM task_tags WHERE task_id = ? ORDER BY tag_id")
                .bind(task_id)
                .fetch_all(self.pool)
                .await?;

        Ok(ids.into_iter().map(|(id,)| id).collect())
    }
}

async fn replace_tags(conn: &mut SqliteConnection, task_id: i64, tags: &[i64]) -> Result<()> {
    sqlx::query("DELETE FROM task_tags WHERE task_id = ?")
        .bind(task_id)
        .execute(&mut *conn)
        .await?;

    for tag_id in tags {
        sqlx::query("INSERT OR IGNORE INTO task_tags (task_id, tag_id) VALUES (?, ?)")
            .bind(task_id)
            .bind(tag_id)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}
