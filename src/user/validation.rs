//! Input validation for user registration.
//!
//! This module provides validation functions for usernames, personal
//! names, email addresses, phone numbers and positions.

use thiserror::Error;

use super::types::Position;

/// Minimum username length.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Maximum username length.
pub const MAX_USERNAME_LENGTH: usize = 50;

/// Minimum first/last name length.
pub const MIN_NAME_LENGTH: usize = 2;

/// Maximum first/last name length.
pub const MAX_NAME_LENGTH: usize = 40;

/// Maximum email length.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Minimum phone number length.
pub const MIN_PHONE_LENGTH: usize = 7;

/// Maximum phone number length.
pub const MAX_PHONE_LENGTH: usize = 75;

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Username length is out of range.
    #[error("The username must be {MIN_USERNAME_LENGTH}-{MAX_USERNAME_LENGTH} characters long.")]
    UsernameLength,

    /// Username contains invalid characters.
    #[error("The username must be alphanumeric characters or have only _ . symbols.")]
    UsernameInvalidChars,

    /// Name length is out of range.
    #[error("The {0} must be {MIN_NAME_LENGTH}-{MAX_NAME_LENGTH} characters long.")]
    NameLength(&'static str),

    /// Name contains non-letters.
    #[error("The {0} must be alphabet characters.")]
    NameInvalidChars(&'static str),

    /// Email is too long.
    #[error("Email must be at most {MAX_EMAIL_LENGTH} characters.")]
    EmailTooLong,

    /// Email format is invalid.
    #[error("Enter a valid email address.")]
    EmailInvalidFormat,

    /// Phone number format is invalid.
    #[error("Phone number must be {MIN_PHONE_LENGTH}-{MAX_PHONE_LENGTH} digits, spaces or dashes with an optional leading +.")]
    PhoneInvalid,

    /// Position is not a known value.
    #[error("\"{0}\" is not a valid choice.")]
    InvalidPosition(String),
}

/// Validate a username.
///
/// Requirements:
/// - Length: 3-50 characters
/// - Characters: ASCII letters, digits, `_` and `.`
///
/// # Examples
///
/// ```
/// use projecthub::user::validation::validate_username;
///
/// assert!(validate_username("john.doe_1").is_ok());
/// assert!(validate_username("invalid user").is_err());
/// ```
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
    {
        return Err(UserValidationError::UsernameInvalidChars);
    }
    let len = username.len();
    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
        return Err(UserValidationError::UsernameLength);
    }
    Ok(())
}

/// Validate a first or last name: 2-40 ASCII letters.
///
/// `field` names the field in the error message.
pub fn validate_person_name(name: &str, field: &'static str) -> Result<(), UserValidationError> {
    if !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(UserValidationError::NameInvalidChars(field));
    }
    let len = name.len();
    if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&len) {
        return Err(UserValidationError::NameLength(field));
    }
    Ok(())
}

/// Validate an email address.
///
/// Requires exactly one `@`, a non-empty local part and a dotted domain
/// without empty labels or whitespace.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(UserValidationError::EmailTooLong);
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(UserValidationError::EmailInvalidFormat);
    };

    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return Err(UserValidationError::EmailInvalidFormat);
    }
    if domain.split('.').any(|label| label.is_empty()) {
        return Err(UserValidationError::EmailInvalidFormat);
    }
    if email.chars().any(|c| c.is_whitespace()) {
        return Err(UserValidationError::EmailInvalidFormat);
    }

    Ok(())
}

/// Validate a phone number: optional leading `+`, then digits, spaces or
/// dashes, 7-75 characters in total and at least one digit.
pub fn validate_phone(phone: &str) -> Result<(), UserValidationError> {
    let len = phone.len();
    if !(MIN_PHONE_LENGTH..=MAX_PHONE_LENGTH).contains(&len) {
        return Err(UserValidationError::PhoneInvalid);
    }
    let body = phone.strip_prefix('+').unwrap_or(phone);
    if !body
        .chars()
        .all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
        || !body.chars().any(|c| c.is_ascii_digit())
    {
        return Err(UserValidationError::PhoneInvalid);
    }
    Ok(())
}

/// Parse a position name.
pub fn parse_position(value: &str) -> Result<Position, UserValidationError> {
    value
        .parse()
        .map_err(|_| UserValidationError::InvalidPosition(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("validuser").is_ok());
        assert!(validate_username("john.doe_1").is_ok());
        assert!(validate_username("abc").is_ok());
        assert_eq!(
            validate_username("invalid user"),
            Err(UserValidationError::UsernameInvalidChars)
        );
        assert_eq!(
            validate_username("bad-name"),
            Err(UserValidationError::UsernameInvalidChars)
        );
        assert_eq!(
            validate_username("ab"),
            Err(UserValidationError::UsernameLength)
        );
        assert_eq!(
            validate_username(&"a".repeat(51)),
            Err(UserValidationError::UsernameLength)
        );
        assert_eq!(
            UserValidationError::UsernameInvalidChars.to_string(),
            "The username must be alphanumeric characters or have only _ . symbols."
        );
    }

    #[test]
    fn test_validate_person_name() {
        assert!(validate_person_name("Valid", "first_name").is_ok());
        assert_eq!(
            validate_person_name("Invalid1", "first_name").unwrap_err().to_string(),
            "The first_name must be alphabet characters."
        );
        assert_eq!(
            validate_person_name("User1", "last_name").unwrap_err().to_string(),
            "The last_name must be alphabet characters."
        );
        assert_eq!(
            validate_person_name("A", "first_name"),
            Err(UserValidationError::NameLength("first_name"))
        );
        assert_eq!(
            validate_person_name("José", "first_name"),
            Err(UserValidationError::NameInvalidChars("first_name"))
        );
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("first.last@sub.example.org").is_ok());
        for email in ["", "invalid", "@example.com", "user@", "user@localhost", "a@b@c.com", "a b@c.com", "a@b..com"] {
            assert_eq!(
                validate_email(email),
                Err(UserValidationError::EmailInvalidFormat),
                "{email}"
            );
        }
        let long = format!("{}@example.com", "a".repeat(250));
        assert_eq!(validate_email(&long), Err(UserValidationError::EmailTooLong));
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+1234567890").is_ok());
        assert!(validate_phone("123 456-7890").is_ok());
        assert_eq!(validate_phone("12345"), Err(UserValidationError::PhoneInvalid));
        assert_eq!(validate_phone("+12345abc"), Err(UserValidationError::PhoneInvalid));
        assert_eq!(validate_phone("++1234567"), Err(UserValidationError::PhoneInvalid));
        assert_eq!(validate_phone("- - - - -"), Err(UserValidationError::PhoneInvalid));
        assert_eq!(
            validate_phone(&"1".repeat(76)),
            Err(UserValidationError::PhoneInvalid)
        );
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("CEO"), Ok(Position::Ceo));
        assert_eq!(parse_position("PRODUCT_OWNER"), Ok(Position::ProductOwner));
        assert_eq!(
            parse_position("Designer").unwrap_err().to_string(),
            "\"Designer\" is not a valid choice."
        );
    }
}
