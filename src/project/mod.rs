//! Project management module for ProjectHub.
//!
//! Projects own tasks, reference users and are linked to stored files.

mod repository;
mod types;
pub mod validation;

pub use repository::ProjectRepository;
pub use types::{NewProject, Project, ProjectUpdate};
pub use validation::{validate_description, validate_project_name, ProjectValidationError};

/// Maximum length for a project name (in characters).
pub const MAX_PROJECT_NAME_LENGTH: usize = 100;

/// Maximum length for a project description (in characters).
pub const MAX_DESCRIPTION_LENGTH: usize = 5000;
