//! Input validation for projects.

use thiserror::Error;

use super::{MAX_DESCRIPTION_LENGTH, MAX_PROJECT_NAME_LENGTH};

/// Project validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    /// Name is empty.
    #[error("Project name must not be empty.")]
    NameEmpty,

    /// Name is too long.
    #[error("Project name must be at most {MAX_PROJECT_NAME_LENGTH} characters.")]
    NameTooLong,

    /// Name contains invalid characters.
    #[error("Project name may contain only letters, digits, spaces, _ and -.")]
    NameInvalidChars,

    /// Description is empty.
    #[error("Description must not be empty.")]
    DescriptionEmpty,

    /// Description is too long.
    #[error("Description must be at most {MAX_DESCRIPTION_LENGTH} characters.")]
    DescriptionTooLong,
}

/// Validate a project name.
///
/// Requirements:
/// - Length: 1-100 characters, not blank
/// - Characters: ASCII letters, digits, space, `_` and `-`
///
/// The name becomes a storage directory, so it must never contain path
/// separators or dots.
pub fn validate_project_name(name: &str) -> Result<(), ProjectValidationError> {
    if name.trim().is_empty() {
        return Err(ProjectValidationError::NameEmpty);
    }
    if name.chars().count() > MAX_PROJECT_NAME_LENGTH {
        return Err(ProjectValidationError::NameTooLong);
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '_' || c == '-')
    {
        return Err(ProjectValidationError::NameInvalidChars);
    }
    Ok(())
}

/// Validate a project description.
pub fn validate_description(description: &str) -> Result<(), ProjectValidationError> {
    if description.trim().is_empty() {
        return Err(ProjectValidationError::DescriptionEmpty);
    }
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(ProjectValidationError::DescriptionTooLong);
    }
    Ok(())
}
