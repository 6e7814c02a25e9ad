//! Project types.

/// A project.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Project {
    /// Unique project ID.
    pub id: i64,
    /// Project name (unique).
    pub name: String,
    /// Project description.
    pub description: String,
    /// When the project was created.
    pub created_at: String,
}

/// Data for creating a new project.
#[derive(Debug, Clone)]
pub struct NewProject {
    /// Project name.
    pub name: String,
    /// Project description.
    pub description: String,
}

impl NewProject {
    /// Create a new NewProject.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Builder for updating a project.
#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
}

impl ProjectUpdate {
    /// Create an empty ProjectUpdate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}
