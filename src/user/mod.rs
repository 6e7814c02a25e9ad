//! User module for ProjectHub.
//!
//! This module handles user registration data:
//! - Field validation (username, names, email, phone, position)
//! - Password hashing with Argon2id
//! - User persistence

pub mod password;
mod repository;
mod types;
pub mod validation;

pub use password::{hash_password, validate_password, PasswordError};
pub use repository::UserRepository;
pub use types::{NewUser, Position, User};
pub use validation::UserValidationError;
