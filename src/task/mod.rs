//! Task management module for ProjectHub.
//!
//! Tasks belong to a project, carry a priority, a status and a deadline,
//! and can be labelled with tags.

mod repository;
mod tag;
mod types;
pub mod validation;

pub use repository::TaskRepository;
pub use tag::TagRepository;
pub use types::{NewTask, Priority, Tag, Task, TaskStatus, TaskUpdate};
pub use validation::TaskValidationError;
