//! Input validation for tasks and tags.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::types::{Priority, TaskStatus};

/// Minimum task name length.
pub const MIN_TASK_NAME_LENGTH: usize = 10;

/// Maximum task name length.
pub const MAX_TASK_NAME_LENGTH: usize = 120;

/// Minimum task description length.
pub const MIN_TASK_DESCRIPTION_LENGTH: usize = 50;

/// Maximum task description length.
pub const MAX_TASK_DESCRIPTION_LENGTH: usize = 10000;

/// Minimum tag name length.
pub const MIN_TAG_NAME_LENGTH: usize = 4;

/// Maximum tag name length.
pub const MAX_TAG_NAME_LENGTH: usize = 20;

/// Task and tag validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Name is too short.
    #[error("Name must be at least {MIN_TASK_NAME_LENGTH} characters")]
    NameTooShort,

    /// Name is too long.
    #[error("Name must be at most {MAX_TASK_NAME_LENGTH} characters")]
    NameTooLong,

    /// Description is too short.
    #[error("Description must be at least {MIN_TASK_DESCRIPTION_LENGTH} characters")]
    DescriptionTooShort,

    /// Description is too long.
    #[error("Description must be at most {MAX_TASK_DESCRIPTION_LENGTH} characters")]
    DescriptionTooLong,

    /// Priority is not one of the known values.
    #[error("\"{0}\" is not a valid choice.")]
    InvalidPriority(i64),

    /// Status is not one of the known values.
    #[error("\"{0}\" is not a valid choice.")]
    InvalidStatus(String),

    /// Deadline is not in the future.
    #[error("Deadline time can not be in past")]
    DeadlineInPast,

    /// Tag name does not match the allowed pattern.
    #[error("Tag name must be {MIN_TAG_NAME_LENGTH}-{MAX_TAG_NAME_LENGTH} letters or spaces")]
    InvalidTagName,
}

/// Validate a task name (10-120 characters).
pub fn validate_task_name(name: &str) -> Result<(), TaskValidationError> {
    let len = name.chars().count();
    if len < MIN_TASK_NAME_LENGTH {
        return Err(TaskValidationError::NameTooShort);
    }
    if len > MAX_TASK_NAME_LENGTH {
        return Err(TaskValidationError::NameTooLong);
    }
    Ok(())
}

/// Validate a task description (50-10000 characters).
pub fn validate_task_description(description: &str) -> Result<(), TaskValidationError> {
    let len = description.chars().count();
    if len < MIN_TASK_DESCRIPTION_LENGTH {
        return Err(TaskValidationError::DescriptionTooShort);
    }
    if len > MAX_TASK_DESCRIPTION_LENGTH {
        return Err(TaskValidationError::DescriptionTooLong);
    }
    Ok(())
}

/// Parse a numeric priority.
///
/// # Examples
///
/// ```
/// use projecthub::task::validation::parse_priority;
///
/// assert!(parse_priority(3).is_ok());
/// assert_eq!(
///     parse_priority(99).unwrap_err().to_string(),
///     "\"99\" is not a valid choice."
/// );
/// ```
pub fn parse_priority(value: i64) -> Result<Priority, TaskValidationError> {
    Priority::from_value(value).ok_or(TaskValidationError::InvalidPriority(value))
}

/// Parse a status string.
pub fn parse_status(value: &str) -> Result<TaskStatus, TaskValidationError> {
    value
        .parse()
        .map_err(|_| TaskValidationError::InvalidStatus(value.to_string()))
}

/// Check that a deadline lies strictly after `now`.
pub fn validate_deadline(
    deadline: &DateTime<Utc>,
    now: &DateTime<Utc>,
) -> Result<(), TaskValidationError> {
    if deadline <= now {
        return Err(TaskValidationError::DeadlineInPast);
    }
    Ok(())
}

/// Validate a tag name: 4-20 ASCII letters or spaces.
pub fn validate_tag_name(name: &str) -> Result<(), TaskValidationError> {
    let len = name.chars().count();
    if !(MIN_TAG_NAME_LENGTH..=MAX_TAG_NAME_LENGTH).contains(&len)
        || !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
    {
        return Err(TaskValidationError::InvalidTagName);
    }
    Ok(())
}
