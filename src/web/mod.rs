//! Web API module for ProjectHub.
//!
//! REST endpoints for projects, project files, tasks, tags and users,
//! plus the OpenAPI document and Swagger UI.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
