//! ProjectHub - project, task and file management backend.
//!
//! Projects own tasks and uploaded files. Files are stored on disk under
//! a per-project directory and recorded in SQLite; tasks carry a
//! priority, a status, tags and a deadline. Users register against the
//! same database. Everything is served as a JSON REST API.

pub mod config;
pub mod datetime;
pub mod db;
pub mod error;
pub mod file;
pub mod logging;
pub mod project;
pub mod task;
pub mod user;
pub mod web;

pub use config::Config;
pub use db::Database;
pub use error::{HubError, Result};
pub use web::WebServer;
