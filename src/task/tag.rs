//! Tag repository for ProjectHub.

use sqlx::SqlitePool;

use super::types::Tag;
use crate::db::is_unique_violation;
use crate::{HubError, Result};

/// Repository for tag CRUD operations.
pub struct TagRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TagRepository<'a> {
    /// Create a new TagRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new tag.
    ///
    /// Returns [`HubError::Conflict`] if the name is already taken.
    pub async fn create(&self, name: &str) -> Result<Tag> {
        let result = sqlx::query("INSERT INTO tags (name) VALUES (?)")
            .bind(name)
            .execute(self.pool)
            .await
            .map_err(|e| map_name_conflict(e, name))?;

        Ok(Tag {
            id: result.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    /// Get a tag by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Tag>> {
        let tag = sqlx::query_as::<_, Tag>("SELECT id, name FROM tags WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(tag)
    }

    /// List all tags ordered by ID.
    pub async fn list(&self) -> Result<Vec<Tag>> {
        let tags = sqlx::query_as::<_, Tag>("SELECT id, name FROM tags ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(tags)
    }

    /// Rename a tag. Returns `Ok(None)` if the tag does not exist.
    pub async fn update(&self, id: i64, name: &str) -> Result<Option<Tag>> {
        let result = sqlx::query("UPDATE tags SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| map_name_conflict(e, name))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Delete a tag by ID. It is detached from every task.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tags WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Return the IDs from `ids` that do not refer to an existing tag.
    pub async fn missing_ids(&self, ids: &[i64]) -> Result<Vec<i64>> {
        let mut missing = Vec::new();
        for &id in ids {
            if self.get_by_id(id).await?.is_none() && !missing.contains(&id) {
                missing.push(id);
            }
        }
        Ok(missing)
    }
}

fn map_name_conflict(e: sqlx::Error, name: &str) -> HubError {
    if is_unique_violation(&e) {
        HubError::Conflict(format!("tag with name '{name}' already exists"))
    } else {
        HubError::Database(e.to_string())
    }
}
