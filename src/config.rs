//! Configuration module for ProjectHub.

use serde::Deserialize;
use std::path::{Component, Path};

use crate::{HubError, Result};

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS allowed origins (empty = allow any origin without credentials).
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/projecthub.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Project file storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FilesConfig {
    /// Directory that stored file paths are resolved against.
    #[serde(default = "default_storage_root")]
    pub storage_root: String,
    /// Relative base directory that prefixes every stored file path.
    #[serde(default = "default_base_dir")]
    pub base_dir: String,
    /// Maximum accepted upload size in bytes.
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size_bytes: u64,
    /// Maximum HTTP request body size in bytes.
    ///
    /// Must be larger than the upload limit so oversized files reach the
    /// upload validator instead of being cut off by the body limit.
    #[serde(default = "default_max_request_body")]
    pub max_request_body_bytes: usize,
}

fn default_storage_root() -> String {
    ".".to_string()
}

fn default_base_dir() -> String {
    "downloads".to_string()
}

fn default_max_upload_size() -> u64 {
    crate::file::MAX_UPLOAD_SIZE
}

fn default_max_request_body() -> usize {
    16 * 1024 * 1024
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            storage_root: default_storage_root(),
            base_dir: default_base_dir(),
            max_upload_size_bytes: default_max_upload_size(),
            max_request_body_bytes: default_max_request_body(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/projecthub.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// File storage configuration.
    #[serde(default)]
    pub files: FilesConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(HubError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| HubError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `PROJECTHUB_DATABASE_PATH`: Override the database file path
    /// - `PROJECTHUB_STORAGE_ROOT`: Override the file storage root
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("PROJECTHUB_DATABASE_PATH") {
            if !path.is_empty() {
                self.database.path = path;
            }
        }
        if let Ok(root) = std::env::var("PROJECTHUB_STORAGE_ROOT") {
            if !root.is_empty() {
                self.files.storage_root = root;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - the file base directory is empty, absolute or contains `..`
    /// - the upload limit is zero
    /// - the request body limit is smaller than the upload limit
    pub fn validate(&self) -> Result<()> {
        let base_dir = self.files.base_dir.trim();
        if base_dir.is_empty() {
            return Err(HubError::Config("files.base_dir must not be empty".to_string()));
        }
        if Path::new(base_dir).is_absolute() {
            return Err(HubError::Config(
                "files.base_dir must be a relative path".to_string(),
            ));
        }
        if Path::new(base_dir)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(HubError::Config(
                "files.base_dir must not contain '..'".to_string(),
            ));
        }
        if self.files.max_upload_size_bytes == 0 {
            return Err(HubError::Config(
                "files.max_upload_size_bytes must be greater than zero".to_string(),
            ));
        }
        if (self.files.max_request_body_bytes as u64) < self.files.max_upload_size_bytes {
            return Err(HubError::Config(
                "files.max_request_body_bytes must not be smaller than files.max_upload_size_bytes"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
