//! Validation utilities for Web API DTOs.
//!
//! The `valid_*` functions adapt the domain validators to the
//! `validator` crate's `custom` attribute so that their messages end up
//! in the field-level error details.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError};

use crate::project::{validate_description, validate_project_name};
use crate::task::validation::{
    parse_status, validate_tag_name, validate_task_description, validate_task_name,
};
use crate::user::validation::{
    parse_position, validate_email, validate_person_name, validate_phone, validate_username,
};
use crate::user::validate_password;
use crate::web::error::ApiError;

/// A JSON extractor that validates the request body.
///
/// This extractor deserializes the request body as JSON and then validates it
/// using the `validator` crate. If validation fails, it returns a detailed
/// error response with field-level error information.
///
/// # Example
///
/// ```ignore
/// use projecthub::web::dto::ValidatedJson;
///
/// async fn create_project(
///     ValidatedJson(payload): ValidatedJson<CreateProjectRequest>,
/// ) -> Result<Json<ApiResponse<ProjectResponse>>, ApiError> {
///     // payload is already validated
///     // ...
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {}", e)))?;

        value.validate().map_err(ApiError::from_validation_errors)?;

        Ok(ValidatedJson(value))
    }
}

fn invalid(code: &'static str, message: impl ToString) -> ValidationError {
    ValidationError::new(code).with_message(message.to_string().into())
}

// ============================================================================
// Custom Validators
// ============================================================================

/// Validate a project name.
pub fn valid_project_name(value: &str) -> Result<(), ValidationError> {
    validate_project_name(value).map_err(|e| invalid("project_name", e))
}

/// Validate a project description.
pub fn valid_description(value: &str) -> Result<(), ValidationError> {
    validate_description(value).map_err(|e| invalid("description", e))
}

/// Validate a task name.
pub fn valid_task_name(value: &str) -> Result<(), ValidationError> {
    validate_task_name(value).map_err(|e| invalid("task_name", e))
}

/// Validate a task description.
pub fn valid_task_description(value: &str) -> Result<(), ValidationError> {
    validate_task_description(value).map_err(|e| invalid("task_description", e))
}

/// Validate a task status.
pub fn valid_status(value: &str) -> Result<(), ValidationError> {
    parse_status(value).map(|_| ()).map_err(|e| invalid("status", e))
}

/// Validate a tag name.
pub fn valid_tag_name(value: &str) -> Result<(), ValidationError> {
    validate_tag_name(value).map_err(|e| invalid("tag_name", e))
}

/// Validate a username.
pub fn valid_username(value: &str) -> Result<(), ValidationError> {
    validate_username(value).map_err(|e| invalid("username", e))
}

/// Validate a first name.
pub fn valid_first_name(value: &str) -> Result<(), ValidationError> {
    validate_person_name(value, "first_name").map_err(|e| invalid("first_name", e))
}

/// Validate a last name.
pub fn valid_last_name(value: &str) -> Result<(), ValidationError> {
    validate_person_name(value, "last_name").map_err(|e| invalid("last_name", e))
}

/// Validate an email address.
pub fn valid_email(value: &str) -> Result<(), ValidationError> {
    validate_email(value).map_err(|e| invalid("email", e))
}

/// Validate a phone number.
pub fn valid_phone(value: &str) -> Result<(), ValidationError> {
    validate_phone(value).map_err(|e| invalid("phone", e))
}

/// Validate a job position.
pub fn valid_position(value: &str) -> Result<(), ValidationError> {
    parse_position(value)
        .map(|_| ())
        .map_err(|e| invalid("position", e))
}

/// Validate password strength.
pub fn valid_password(value: &str) -> Result<(), ValidationError> {
    validate_password(value).map_err(|e| invalid("password", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: ValidationError) -> String {
        err.message.map(|m| m.to_string()).unwrap_or_default()
    }

    #[test]
    fn test_valid_project_name() {
        assert!(valid_project_name("Acme Inc").is_ok());
        assert!(valid_project_name("").is_err());
        assert!(valid_project_name("../etc").is_err());
    }

    #[test]
    fn test_valid_task_name_message() {
        assert!(valid_task_name("Write the report").is_ok());
        assert_eq!(
            message(valid_task_name("short").unwrap_err()),
            "Name must be at least 10 characters"
        );
    }

    #[test]
    fn test_valid_status() {
        assert!(valid_status("in_progress").is_ok());
        assert_eq!(
            message(valid_status("done").unwrap_err()),
            "\"done\" is not a valid choice."
        );
    }

    #[test]
    fn test_valid_person_names() {
        assert!(valid_first_name("Valid").is_ok());
        assert_eq!(
            message(valid_first_name("Invalid1").unwrap_err()),
            "The first_name must be alphabet characters."
        );
        assert_eq!(
            message(valid_last_name("User1").unwrap_err()),
            "The last_name must be alphabet characters."
        );
    }

    #[test]
    fn test_valid_username_and_position() {
        assert!(valid_username("newuser").is_ok());
        assert_eq!(
            message(valid_username("invalid user").unwrap_err()),
            "The username must be alphanumeric characters or have only _ . symbols."
        );
        assert!(valid_position("QA").is_ok());
        assert!(valid_position("qa").is_err());
    }

    #[test]
    fn test_valid_contact_fields() {
        assert!(valid_email("user@example.com").is_ok());
        assert!(valid_email("invalid").is_err());
        assert!(valid_phone("+1234567890").is_ok());
        assert!(valid_phone("abc").is_err());
    }

    #[test]
    fn test_valid_password() {
        assert!(valid_password("Password123").is_ok());
        assert!(valid_password("short1").is_err());
        assert!(valid_password("onlyletters").is_err());
    }
}
